use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use profitmap::cli::{log_level, Cli, Commands};
use profitmap::commands::{self, CalcConfig};
use profitmap::formatting::{ColorMode, EmojiMode, FormattingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level(cli.verbosity)))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Calc {
            input,
            config,
            input_format,
            tax_percent,
            packaging_percent,
            format,
            output,
            sort_by,
            descending,
            ascending,
            plain,
        } => commands::handle_calc(CalcConfig {
            input,
            config,
            input_format,
            tax_percent,
            packaging_percent,
            format,
            output,
            sort_by,
            descending: sort_direction(descending, ascending),
            formatting_config: create_formatting_config(plain),
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

// None defers to the config file
fn sort_direction(descending: bool, ascending: bool) -> Option<bool> {
    match (descending, ascending) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
