mod analyze;
mod batch;
mod lexicon;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "moodscope")]
#[command(about = "Sentiment and emotion analyzer for messages")]
struct Cli {
    /// Custom emotion lexicon (CSV or YAML); overrides `MOODSCOPE_LEXICON_PATH`
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a single message
    Analyze {
        /// Message text; read from --file or stdin when omitted
        text: Option<String>,

        /// Read the message from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze every row of a CSV file with a `message` column
    Batch {
        /// CSV input file
        input: PathBuf,

        /// Top emotions counted per message; overrides `MOODSCOPE_TOP_EMOTIONS`
        #[arg(long)]
        top: Option<usize>,

        /// Write the text report (to `MOODSCOPE_REPORT_PATH` when no path is given)
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,

        /// Print the aggregate as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the custom emotions and keywords that would be loaded
    Lexicon,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = moodscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let lexicon_path = cli
        .lexicon
        .clone()
        .unwrap_or_else(|| config.lexicon_path.clone());
    tracing::info!(
        env = %config.env,
        lexicon = %lexicon_path.display(),
        "moodscope starting"
    );

    match cli.command {
        Some(Commands::Analyze { text, file, json }) => {
            analyze::run_analyze(&lexicon_path, text, file.as_deref(), json)
        }
        Some(Commands::Batch {
            input,
            top,
            export,
            json,
        }) => {
            let top_emotions = top.unwrap_or(config.top_emotions);
            if top_emotions == 0 {
                anyhow::bail!("--top must be at least 1");
            }
            let export_path = export.map(|path| path.unwrap_or_else(|| config.report_path.clone()));
            batch::run_batch_command(
                &lexicon_path,
                &input,
                top_emotions,
                export_path.as_deref(),
                json,
            )
        }
        Some(Commands::Lexicon) => lexicon::run_lexicon_list(&lexicon_path),
        None => {
            println!("moodscope: run `moodscope --help` for available commands");
            Ok(())
        }
    }
}
