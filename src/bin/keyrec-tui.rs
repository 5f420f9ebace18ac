// Keyrec terminal recorder
// Interactive front-end for capturing key sequences as device commands

#[path = "../tui/mod.rs"]
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use keyrec_core::config::parser::Config;
use keyrec_core::Language;

/// Interactive key recorder
#[derive(Parser, Debug)]
#[command(name = "keyrec-tui")]
#[command(version)]
#[command(about = "Interactive key recorder", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Display language for readable commands
    #[arg(short, long, value_name = "LANG")]
    lang: Option<Language>,

    /// Write debug logs to this file; the terminal is owned by the UI
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    log::info!("starting recorder, language {}", config.language);

    tui::run(&config)
}
