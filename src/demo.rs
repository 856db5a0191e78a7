//! Demo portfolio page.
//!
//! Renders a single-page portfolio that carries every hook of the markup
//! contract (see [`dom`](crate::dom)), so the wasm build can be tried in a
//! browser without writing any HTML:
//!
//! ```text
//! dist/
//! ├── index.html          # sidebar, nav, four pages, modal
//! ├── images/
//! │   ├── project-1.svg   # placeholder thumbnails
//! │   └── ...
//! └── pkg/                # wasm-pack --target web output (not written here)
//! ```
//!
//! The page loads `./pkg/folio_ui.js` as an ES module. Building that bundle is
//! left to `wasm-pack build --target web --out-dir dist/pkg`.
//!
//! ## CSS
//!
//! `static/demo.css` holds the layout and is embedded at compile time. The
//! reveal and tab rules are generated from the active configuration by
//! [`config::generate_reveal_css`], so renamed classes stay in sync with what
//! the script toggles. A config file passed on the command line is also
//! embedded verbatim in the page's `folio-config` block.

use crate::config::{self, ConfigError, ScriptConfig};
use crate::dom;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Config cannot be embedded in the page: it contains `{0}`")]
    Unembeddable(&'static str),
}

const CSS_STATIC: &str = include_str!("../static/demo.css");

const LOADER: &str = r#"import init from "./pkg/folio_ui.js";
init();"#;

/// A page of the demo portfolio: nav label, `data-page` identifier, content.
struct DemoPage {
    label: &'static str,
    id: &'static str,
    heading: &'static str,
    paragraphs: &'static [&'static str],
    items: &'static [&'static str],
    thumbnails: &'static [DemoThumbnail],
}

struct DemoThumbnail {
    file: &'static str,
    alt: &'static str,
    hue: u16,
}

const PAGES: &[DemoPage] = &[
    DemoPage {
        label: "About",
        id: "about",
        heading: "About me",
        paragraphs: &[
            "Systems programmer with a soft spot for small, fast tools.",
            "I like compilers, storage engines, and anything that fits in a single binary.",
        ],
        items: &["Rust", "WebAssembly", "Embedded Linux"],
        thumbnails: &[],
    },
    DemoPage {
        label: "Resume",
        id: "resume",
        heading: "Resume",
        paragraphs: &["Eight years of backend and infrastructure work."],
        items: &[
            "2022 – now: Staff engineer, storage team",
            "2019 – 2022: Backend engineer, payments",
            "2016 – 2019: Firmware developer",
        ],
        thumbnails: &[],
    },
    DemoPage {
        label: "Projects",
        id: "projects",
        heading: "Projects",
        paragraphs: &["Click a thumbnail to enlarge it."],
        items: &[],
        thumbnails: &[
            DemoThumbnail {
                file: "project-1.svg",
                alt: "Log-structured key-value store",
                hue: 24,
            },
            DemoThumbnail {
                file: "project-2.svg",
                alt: "CPU scheduling simulator",
                hue: 200,
            },
        ],
    },
    DemoPage {
        label: "Certificates",
        id: "certificates",
        heading: "Certificates",
        paragraphs: &["Courses and certifications."],
        items: &[],
        thumbnails: &[
            DemoThumbnail {
                file: "cert-1.svg",
                alt: "Distributed systems course",
                hue: 140,
            },
            DemoThumbnail {
                file: "cert-2.svg",
                alt: "Embedded Rust workshop",
                hue: 290,
            },
        ],
    },
];

/// Write the demo page (and its placeholder images) to `output_dir`.
///
/// With `config_path`, the file is loaded, validated, used for the generated
/// CSS, and embedded in the page. Returns the path of `index.html`.
pub fn generate(output_dir: &Path, config_path: Option<&Path>) -> Result<PathBuf, DemoError> {
    let (config, embedded) = match config_path {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            let config = ScriptConfig::from_toml_str(&source)?;
            check_embeddable(&source)?;
            (config, Some(source))
        }
        None => (ScriptConfig::default(), None),
    };

    let images_dir = output_dir.join("images");
    fs::create_dir_all(&images_dir)?;
    for thumb in PAGES.iter().flat_map(|p| p.thumbnails) {
        fs::write(images_dir.join(thumb.file), placeholder_svg(thumb))?;
    }

    let index = output_dir.join("index.html");
    let page = render_page(&config, embedded.as_deref());
    fs::write(&index, page.into_string())?;
    tracing::info!(path = %index.display(), "demo page written");
    Ok(index)
}

/// Sequences that would end or re-mode a `<script>` element early when they
/// appear in its text. Matched case-insensitively.
const SCRIPT_BREAKERS: &[&str] = &["</script", "<!--"];

/// Check that a config source can sit verbatim inside the page's
/// `folio-config` block.
///
/// The block is raw text: nothing in it is escaped, and the browser hands the
/// script exactly these bytes. A closing tag in a TOML comment or string
/// would end the block and turn the rest of the file into page markup.
pub fn check_embeddable(source: &str) -> Result<(), DemoError> {
    let lowered = source.to_ascii_lowercase();
    match SCRIPT_BREAKERS.iter().find(|seq| lowered.contains(**seq)) {
        Some(seq) => Err(DemoError::Unembeddable(*seq)),
        None => Ok(()),
    }
}

/// Render the full demo document.
///
/// `embedded_config` is written verbatim; [`generate`] runs it through
/// [`check_embeddable`] first.
pub fn render_page(config: &ScriptConfig, embedded_config: Option<&str>) -> Markup {
    let css = format!("{}\n\n{}", CSS_STATIC, config::generate_reveal_css(config));
    let active = config.classes.active.as_str();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Portfolio" }
                style { (PreEscaped(css)) }
                @if let Some(toml) = embedded_config {
                    script type="application/toml" id=(dom::CONFIG_SCRIPT_ID) { (PreEscaped(toml)) }
                }
            }
            body {
                main {
                    (sidebar())
                    div.main-content {
                        (navbar(active))
                        @for (index, page) in PAGES.iter().enumerate() {
                            (render_article(page, index == 0, active))
                        }
                    }
                }
                (modal())
                script type="module" { (PreEscaped(LOADER)) }
            }
        }
    }
}

fn sidebar() -> Markup {
    html! {
        aside.sidebar data-sidebar {
            div.sidebar-info {
                h2.name { "Alex Doe" }
                span.title { "Software Engineer" }
                button.info-more-btn data-sidebar-btn type="button" { "Show contacts" }
            }
            div.sidebar-more {
                ul.contacts-list {
                    li { a href="mailto:alex@example.com" { "alex@example.com" } }
                    li { a href="https://github.com/" { "GitHub" } }
                }
            }
        }
    }
}

fn navbar(active: &str) -> Markup {
    html! {
        nav.navbar {
            ul {
                @for (index, page) in PAGES.iter().enumerate() {
                    li {
                        button
                            class=(nav_link_class(index == 0, active))
                            data-nav-link=(page.label)
                            type="button" { (page.label) }
                    }
                }
            }
        }
    }
}

fn nav_link_class(is_active: bool, active: &str) -> String {
    if is_active {
        format!("navbar-link {active}")
    } else {
        "navbar-link".to_string()
    }
}

fn render_article(page: &DemoPage, is_active: bool, active: &str) -> Markup {
    html! {
        article class=[is_active.then_some(active)] data-page=(page.id) {
            header { h2 { (page.heading) } }
            @for paragraph in page.paragraphs {
                p { (paragraph) }
            }
            @if !page.items.is_empty() {
                ul {
                    @for item in page.items {
                        li { (item) }
                    }
                }
            }
            @if !page.thumbnails.is_empty() {
                ul.project-list {
                    @for thumb in page.thumbnails {
                        li.project-item {
                            a href=(format!("images/{}", thumb.file)) {
                                img src=(format!("images/{}", thumb.file)) alt=(thumb.alt) loading="lazy";
                            }
                        }
                    }
                }
            }
        }
    }
}

fn modal() -> Markup {
    html! {
        div id=(dom::MODAL_ID) class="modal" {
            span.close-modal { (PreEscaped("&times;")) }
            img id=(dom::MODAL_IMAGE_ID) alt="";
            div id=(dom::CAPTION_ID) {}
        }
    }
}

fn placeholder_svg(thumb: &DemoThumbnail) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600" viewBox="0 0 800 600">
<rect width="800" height="600" fill="hsl({hue} 45% 55%)"/>
<text x="400" y="310" font-family="sans-serif" font-size="32" fill="#ffffff" text-anchor="middle">{alt}</text>
</svg>
"##,
        hue = thumb.hue,
        alt = thumb.alt,
    )
}
