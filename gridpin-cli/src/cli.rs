use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "gridpin")]
#[command(about = "Compute sticky column styles for a table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the style of every column in a table definition
    Render {
        /// Table definition (JSON)
        table: PathBuf,

        /// Theme overrides (JSON). Defaults to theme.json in the config directory
        #[arg(long, short = 't')]
        theme: Option<PathBuf>,

        /// Palette mapping variable names to colors (JSON)
        #[arg(long, short = 'p')]
        palette: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Override measured horizontal overflow
        #[arg(long)]
        horizontal: Option<bool>,

        /// Override measured vertical overflow
        #[arg(long)]
        vertical: Option<bool>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// JSON array of `{ column, style }` objects
    Json,
    /// One `id: declarations` line per column
    Css,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "gridpin",
            "render",
            "table.json",
            "--format",
            "css",
            "--horizontal",
            "false",
        ])
        .unwrap();

        let Commands::Render {
            table,
            theme,
            format,
            horizontal,
            vertical,
            ..
        } = cli.command;
        assert_eq!(table, PathBuf::from("table.json"));
        assert_eq!(theme, None);
        assert_eq!(format, Format::Css);
        assert_eq!(horizontal, Some(false));
        assert_eq!(vertical, None);
        assert!(!cli.verbose);
    }
}
