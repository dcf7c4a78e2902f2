//! Fleare CLI
//!
//! Command-line front end: parses flags, opens the connection and hands it
//! to the interactive command loop.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use fleare::config::{DEFAULT_HOST, DEFAULT_PORT};
use fleare::repl::{CommandLoop, RustylineEditor};
use fleare::{Config, Connection};
use tracing_subscriber::{fmt, EnvFilter};

/// Fleare CLI
#[derive(Parser, Debug)]
#[command(name = "fleare-cli")]
#[command(about = "Command-line interface for Fleare, an in-memory database")]
#[command(version)]
struct Args {
    /// Hostname for the server
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port for the server
    #[arg(long, default_value_t = u32::from(DEFAULT_PORT))]
    port: u32,

    /// Username for the account
    #[arg(short, long, default_value = "")]
    user: String,

    /// Password for the account
    #[arg(short, long, default_value = "")]
    password: String,

    /// History file (defaults to ~/.fleare_history)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .host(&args.host)
        .port(args.port)
        .username(&args.user)
        .password(&args.password)
        .color(!args.no_color);
    if let Some(path) = &args.history_file {
        builder = builder.history_file(path);
    }
    let config = builder.build();

    tracing::debug!("fleare-cli v{}", fleare::VERSION);

    let mut conn = match Connection::open(&config.host, config.port) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let editor = match RustylineEditor::new(config.history_file.clone()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error setting up readline: {}", e);
            conn.close();
            std::process::exit(1);
        }
    };

    let mut repl = CommandLoop::new(editor, io::stdout(), &config);
    match repl.run(&mut conn, &config.username, &config.password) {
        Ok(reason) => {
            tracing::debug!("Command loop ended: {:?}", reason);
            std::process::exit(reason.exit_code());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
