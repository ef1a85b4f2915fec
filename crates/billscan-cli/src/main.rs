mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "billscan",
    version,
    about = "Extract and validate structured data from OCR'd medical bills"
)]
struct Cli {
    /// Log pipeline details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a bill record from OCR output (without validating)
    Extract {
        /// Text transcript, or saved read-result JSON
        input_file: PathBuf,

        /// OCR confidence to record for plain text transcripts (ignored for .json)
        #[arg(short, long, default_value_t = commands::DEFAULT_CONFIDENCE)]
        confidence: f64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extracted record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract and validate a bill, optionally storing it when accepted
    Check {
        /// Text transcript, or saved read-result JSON
        input_file: PathBuf,

        /// OCR confidence to record for plain text transcripts (ignored for .json)
        #[arg(short, long, default_value_t = commands::DEFAULT_CONFIDENCE)]
        confidence: f64,

        /// Custom JSON rules file
        #[arg(short, long = "rules", value_name = "FILE", conflicts_with = "preset")]
        rules: Option<PathBuf>,

        /// Predefined rules preset (default: "default")
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Option<String>,

        /// Treat this date (YYYY-MM-DD) as today when checking the date of service
        #[arg(long, value_name = "DATE")]
        today: Option<chrono::NaiveDate>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Append accepted bills to this JSON store
        #[arg(short, long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Search a JSON bill store by hospital name or bill text
    Search {
        /// Path to the JSON store
        store: PathBuf,

        /// Case-insensitive search term (empty lists everything)
        #[arg(default_value = "")]
        term: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate rule files
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rule presets
    List,
    /// Show the limits of a preset
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom rules file
    Validate {
        /// Path to JSON rules file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            confidence,
            output,
            out,
        } => commands::extract::run(input_file, confidence, &output, out),
        Commands::Check {
            input_file,
            confidence,
            rules,
            preset,
            today,
            output,
            store,
        } => commands::check::run(commands::check::CheckArgs {
            input_file,
            confidence,
            rules,
            preset,
            today,
            output_format: output,
            store,
        }),
        Commands::Search {
            store,
            term,
            output,
        } => commands::search::run(&store, &term, &output),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Show { preset } => commands::rules::show(&preset),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
