use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use onfido_config::sdk::DirectoryAssetResolver;
use onfido_config::utils::read_file;
use onfido_config::{AppearanceConfig, OnfidoConfigBuilder, PluginConfig};

/// Preview how a plugin configuration translates into an SDK configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the plugin configuration (JSON, YAML or TOML)
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Directory holding the co-branding logos as PNG files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    assets: PathBuf,

    /// Optional JSON appearance description with hex colors
    #[arg(long, value_name = "FILE")]
    appearance: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let config = PluginConfig::load_from_file(&args.config)?;

    let appearance = match &args.appearance {
        Some(path) => serde_json::from_str::<AppearanceConfig>(&read_file(path)?)?.resolve(),
        None => AppearanceConfig::default().resolve(),
    };

    let builder = OnfidoConfigBuilder::new(DirectoryAssetResolver::new(&args.assets));
    let mode = builder.build(&config, &appearance, None, None)?;

    Ok(serde_json::to_string_pretty(&mode)?)
}

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let rendered = match run(&args) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("Failed to translate {}: {}", args.config.display(), e);
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(output) => {
            if let Err(e) = std::fs::write(output, rendered) {
                error!("Failed to write {}: {}", output.display(), e);
                std::process::exit(1);
            }
            info!("Wrote translated configuration to {}", output.display());
        }
        None => println!("{}", rendered),
    }
}
