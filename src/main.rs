mod calc;
mod db;
mod shell;

use anyhow::Context;
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout carries the interactive transcript; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook=error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let db_path = Path::new(db::DB_FILE_NAME);
    let conn = db::open_db(db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = shell::Session {
        conn: &conn,
        input: stdin.lock(),
        output: stdout.lock(),
    };
    shell::run(&mut session).context("terminal i/o failed")?;
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("gradebook: {e:#}");
        std::process::exit(1);
    }
}
