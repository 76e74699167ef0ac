// ABOUTME: Main entry point for the termimg command-line application
// ABOUTME: Detects the terminal's image protocol and writes the rendered sequence to stdout

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use termimg::{CapabilitySignal, TermImgError};
use termimg_cli::app::{Settings, build_renderer, effective_signal};
use termimg_cli::cli::Cli;
use termimg_cli::config::Config;

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let settings = Settings::resolve(&cli, &config);
    let signal = effective_signal(CapabilitySignal::from_env(), &settings, &config);
    let terminal_width = crossterm::terminal::size().ok().map(|(cols, _)| cols);

    let renderer = build_renderer(&signal, &settings, terminal_width);

    if cli.detect {
        println!("{}", renderer.protocol());
        return Ok(());
    }

    let Some(path) = cli.path.as_deref() else {
        anyhow::bail!("No image path given");
    };

    let sequence = renderer.render(path, settings.width).await?;

    // Raw bytes: no log layer in between, straight to stdout
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(sequence.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<TermImgError>() {
            // Already carries its source in the message
            Some(err) => {
                eprintln!("Error: {}", err);
                if let Some(help) = err.help_text() {
                    eprintln!();
                    eprintln!("{}", help);
                }
            }
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}
