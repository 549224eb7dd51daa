//! dogdex - browse adoptable dogs from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use dogdex::config::{default_config_path, init_config_file, load_settings};
use dogdex_core::prelude::*;
use url::Url;

/// dogdex - browse, favorite and match adoptable dogs
#[derive(Parser, Debug)]
#[command(name = "dogdex")]
#[command(about = "Browse, favorite and match adoptable dogs", long_about = None)]
struct Args {
    /// Service root URL
    #[arg(long, value_name = "URL", value_parser = parse_base_url)]
    base_url: Option<Url>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Dogs per page
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,

    /// Prefill the sign-in name
    #[arg(long)]
    name: Option<String>,

    /// Prefill the sign-in email
    #[arg(long)]
    email: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_base_url(value: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    dogdex::init()?;

    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("No config directory on this platform, pass --config");
            std::process::exit(1);
        };
        if init_config_file(&path)? {
            eprintln!("Wrote {}", path.display());
        } else {
            eprintln!("{} already exists", path.display());
        }
        return Ok(());
    }

    let mut settings = config_path
        .as_deref()
        .map(load_settings)
        .unwrap_or_default();

    // Command line wins over the file
    if let Some(url) = args.base_url {
        settings.api.base_url = Some(url.as_str().trim_end_matches('/').to_string());
    }
    if let Some(size) = args.page_size {
        settings.browse.page_size = size;
    }
    if args.name.is_some() {
        settings.user.name = args.name;
    }
    if args.email.is_some() {
        settings.user.email = args.email;
    }

    dogdex::run(settings.sanitized()).await
}
