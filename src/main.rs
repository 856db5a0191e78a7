use clap::{Parser, Subcommand};
use folio_ui::{config, demo};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio-ui")]
#[command(about = "Companion tool for the folio-ui portfolio script")]
#[command(long_about = "\
Companion tool for the folio-ui portfolio script

The script itself runs in the browser as WebAssembly. This tool renders a
demo page that exercises it and manages its configuration.

Markup the script looks for:

  [data-sidebar]               sidebar container, toggled by...
  [data-sidebar-btn]           ...this button
  [data-nav-link=\"About\"]      nav link, shows the page named by its value
  article[data-page=\"about\"]   page (matched case-insensitively)
  .project-item img            thumbnail, opens the image modal
  #image-modal #modal-img #caption .close-modal   modal parts

Build the bundle next to the demo page with:

  folio-ui demo --output dist
  wasm-pack build --target web --out-dir dist/pkg

Run 'folio-ui gen-config' to print a documented folio.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a demo portfolio page that uses every feature
    Demo {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
        /// Config file to apply and embed in the page
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a stock folio.toml with all options documented
    GenConfig,
    /// Validate a config file without writing anything
    CheckConfig {
        /// Config file to validate
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio_ui=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { output, config } => {
            let index = demo::generate(&output, config.as_deref())?;
            println!("Demo page written to {}", index.display());
            println!(
                "Build the script with: wasm-pack build --target web --out-dir {}",
                output.join("pkg").display()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::CheckConfig { path } => {
            println!("==> Checking {}", path.display());
            config::load_config(&path)?;
            println!("==> Config is valid");
        }
    }

    Ok(())
}
