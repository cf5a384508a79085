mod cli;
mod error;
mod output;
mod paths;

use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use gridpin::{Palette, PinTheme, StickyColumnStyler};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::{Cli, Commands};
use crate::error::CliError;

fn init_logging(verbose: bool) {
    let rotation = paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(log_file) = File::create(&path) else { return };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if WriteLogger::init(level, Config::default(), log_file).is_ok() {
        rotation.log();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Render {
            table,
            theme,
            palette,
            format,
            horizontal,
            vertical,
        } => {
            let config = output::load_table(&table)?;

            let theme = match theme.or_else(paths::default_theme) {
                Some(path) => {
                    log::debug!("Loading theme from {}", path.display());
                    output::load_theme(&path)?
                }
                None => PinTheme::default(),
            };
            let palette = palette.as_deref().map(output::load_palette).transpose()?;

            let styler = StickyColumnStyler::new(theme);
            let rendered = output::render(
                &config,
                &table,
                &styler,
                palette.as_ref().map(|p| p as &dyn Palette),
                (horizontal, vertical),
                format,
            )?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
