// Keyrec CLI
// Encodes key sequences into device commands and decodes commands for display

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use keyrec_core::config::parser::Config;
use keyrec_core::{KeyEvent, Language, RecordingSession};

/// Record keyboard input as device AT commands
#[derive(Parser, Debug)]
#[command(name = "keyrec")]
#[command(version)]
#[command(about = "Record keyboard input as device AT commands", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Display language for readable commands
    #[arg(short, long, value_name = "LANG")]
    lang: Option<Language>,

    /// Print the readable form of a command (can be used multiple times)
    #[arg(short, long, value_name = "COMMAND")]
    decode: Vec<String>,

    /// Record whitespace separated key tokens and print the command
    #[arg(short, long, value_name = "KEYS")]
    encode: Option<String>,

    /// List recordable keycodes and their names
    #[arg(long)]
    list_keys: bool,

    /// Validate config and exit
    #[arg(long)]
    check_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::load(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("failed to load {}", path.display()),
        None => "failed to load default config".to_string(),
    })?;
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    Ok(config)
}

/// Feed key tokens through a fresh session, returning the command and its readable text
fn encode_tokens(session: &mut RecordingSession, keys: &str) -> anyhow::Result<(String, String)> {
    for token in keys.split_whitespace() {
        let Some(event) = KeyEvent::from_token(token) else {
            bail!("unknown key {:?}", token);
        };
        let outcome = session.record_key_event(event);
        log::debug!("{} -> {}", token, outcome);
    }
    let preview = session.preview();
    Ok((preview.command.clone(), preview.readable.clone()))
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    if args.check_config {
        match config.source_path() {
            Some(path) => println!("Configuration is valid: {}", path.display()),
            None => println!("No config file found; built-in defaults are valid"),
        }
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list_keys {
        for (code, name) in config.names.iter() {
            writeln!(out, "{:>4}  {}", code.code(), name)?;
        }
    }

    let mut session = config.session()?;

    if let Some(keys) = &args.encode {
        let (command, readable) = encode_tokens(&mut session, keys)?;
        if command.is_empty() {
            bail!("no recordable keys in {:?}", keys);
        }
        writeln!(out, "{}", command)?;
        writeln!(out, "{}", readable)?;
    }

    for command in &args.decode {
        writeln!(out, "{}", session.decode(command))?;
    }

    if !args.list_keys && args.encode.is_none() && args.decode.is_empty() {
        bail!("nothing to do; pass --encode, --decode or --list-keys");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
