// src/main.rs

use anyhow::Result;
use buscador::cli::Cli;
use buscador::config::ConfigBuilder;
use buscador::errors::Error;
use buscador::output::write_run_summary;
use buscador::progress::ConsoleProgress;
use clap::Parser;
use std::io::Write;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::debug!("Starting buscador v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!("\nUso:");
            eprintln!("  buscador <DIRECTORIO> -k <PALABRA>");
            std::process::exit(1);
        }
    };

    println!("BUSCADOR DE PALABRA CLAVE EN CORPUS TEXTUAL");
    println!("{}", "=".repeat(80));
    println!("Directorio: {}", config.root.display());
    println!("Palabra clave: \"{}\" (búsqueda EXACTA)\n", config.keyword);

    match buscador::run(&config, &ConsoleProgress) {
        Ok(report) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_run_summary(&mut handle, &report)?;
            handle.flush()?;
            Ok(())
        }
        Err(e @ Error::NoTxtFiles(_)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
