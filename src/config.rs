//! Script configuration module.
//!
//! Handles loading and validating `folio.toml`. Every value has a default that
//! matches the stock portfolio stylesheet, so a page with no configuration at
//! all behaves exactly as described in the crate docs.
//!
//! ## Where Configuration Comes From
//!
//! - **In the browser**: an inline block in the host page, read once at startup:
//!
//!   ```html
//!   <script type="application/toml" id="folio-config">
//!   [reveal]
//!   threshold = 0.35
//!   </script>
//!   ```
//!
//! - **On the command line**: `folio-ui demo --config folio.toml` embeds the file
//!   into the generated demo page, and `folio-ui check-config` validates one.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [reveal]
//! section_selector = "article"          # Blocks whose text is revealed
//! text_selector = "h1, h2, h3, p, li"   # Elements revealed inside each block
//! threshold = 0.2                       # Visible fraction needed to reveal (0-1]
//! slide_left_class = "slide-left"       # Entrance class for even positions
//! slide_right_class = "slide-right"     # Entrance class for odd positions
//! visible_class = "visible"             # Class present while revealed
//!
//! [classes]
//! active = "active"                     # Open sidebar, current tab and page
//!
//! [modal]
//! display = "flex"                      # Inline display of an open modal
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [reveal]
//! visible_class = "in-view"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Script configuration loaded from `folio.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Scroll reveal selectors, threshold, and class names.
    pub reveal: RevealConfig,
    /// Class names shared by the sidebar and tab navigation.
    pub classes: ClassConfig,
    /// Image modal presentation.
    pub modal: ModalConfig,
}

impl ScriptConfig {
    /// Parse a (possibly partial) TOML document and validate the result.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ScriptConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be greater than 0 and at most 1".into(),
            ));
        }
        for (key, selector) in [
            ("reveal.section_selector", &self.reveal.section_selector),
            ("reveal.text_selector", &self.reveal.text_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        for (key, class) in [
            ("reveal.slide_left_class", &self.reveal.slide_left_class),
            ("reveal.slide_right_class", &self.reveal.slide_right_class),
            ("reveal.visible_class", &self.reveal.visible_class),
            ("classes.active", &self.classes.active),
        ] {
            validate_class_name(key, class)?;
        }
        if self.reveal.slide_left_class == self.reveal.slide_right_class {
            return Err(ConfigError::Validation(
                "reveal.slide_left_class and reveal.slide_right_class must differ".into(),
            ));
        }
        if self.modal.display.trim().is_empty() || self.modal.display == "none" {
            return Err(ConfigError::Validation(
                "modal.display must be a visible display value".into(),
            ));
        }
        Ok(())
    }
}

fn validate_class_name(key: &str, class: &str) -> Result<(), ConfigError> {
    if class.is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if class.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{key} must be a single class name, got {class:?}"
        )));
    }
    Ok(())
}

/// Scroll reveal settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Content blocks observed independently, one observer each.
    pub section_selector: String,
    /// Elements inside each block that slide in, in document order.
    pub text_selector: String,
    /// Fraction of an element's area that must be in view to reveal it.
    pub threshold: f64,
    /// Entrance class for elements at even positions.
    pub slide_left_class: String,
    /// Entrance class for elements at odd positions.
    pub slide_right_class: String,
    /// Class present while an element is revealed.
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_selector: "article".to_string(),
            text_selector: "h1, h2, h3, p, li".to_string(),
            threshold: 0.2,
            slide_left_class: "slide-left".to_string(),
            slide_right_class: "slide-right".to_string(),
            visible_class: "visible".to_string(),
        }
    }
}

/// Class names for two-state affordances.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassConfig {
    /// Marks the open sidebar, the current nav link, and the current page.
    pub active: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
        }
    }
}

/// Image modal settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalConfig {
    /// Inline `display` value applied when the modal opens.
    pub display: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            display: "flex".to_string(),
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from a TOML file.
///
/// Missing keys fall back to defaults, unknown keys are rejected, and the
/// result is validated.
pub fn load_config(path: &Path) -> Result<ScriptConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    ScriptConfig::from_toml_str(&content)
}

/// Returns a fully-commented stock `folio.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio-ui Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Embed in a page as the text of a
#   <script type="application/toml" id="folio-config">
# element.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Content blocks, each observed on its own.
section_selector = "article"

# Elements inside each block that slide in. Even positions get the left
# entrance class, odd positions the right one.
text_selector = "h1, h2, h3, p, li"

# Fraction of an element that must be on screen before it is revealed.
# Elements scrolled back out of view are hidden again.
threshold = 0.2

slide_left_class = "slide-left"
slide_right_class = "slide-right"
visible_class = "visible"

# ---------------------------------------------------------------------------
# Sidebar and tab navigation
# ---------------------------------------------------------------------------
[classes]
# Marks the open sidebar, the current nav link, and the current page.
active = "active"

# ---------------------------------------------------------------------------
# Image modal
# ---------------------------------------------------------------------------
[modal]
# Inline display value of the open modal. Closing always sets "none".
display = "flex"
"##
}

/// Generate the reveal and tab CSS for the configured class names.
///
/// The script only toggles class membership; this is the stylesheet half of
/// the contract, used by the demo page.
pub fn generate_reveal_css(config: &ScriptConfig) -> String {
    format!(
        r#".{left}, .{right} {{
    opacity: 0;
    transition: opacity 0.6s ease, transform 0.6s ease;
}}

.{left} {{
    transform: translateX(-3rem);
}}

.{right} {{
    transform: translateX(3rem);
}}

.{left}.{visible}, .{right}.{visible} {{
    opacity: 1;
    transform: none;
}}

article[data-page] {{
    display: none;
}}

article[data-page].{active} {{
    display: block;
}}

[data-nav-link].{active} {{
    color: var(--color-accent);
}}

[data-sidebar].{active} .sidebar-more {{
    max-height: 40rem;
}}"#,
        left = config.reveal.slide_left_class,
        right = config.reveal.slide_right_class,
        visible = config.reveal.visible_class,
        active = config.classes.active,
    )
}
