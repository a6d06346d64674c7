use std::path::PathBuf;

use clap::Parser;
use investigation::{FileNotesStore, InvestigationConfig, InvestigationSession};
use tokio::io::{stdin, BufReader};
use tracing::info;

mod app;
mod command;
mod repl;

use app::Detective;
use command::HELP;

/// Default directory for per-case notes files.
const DEFAULT_NOTES_DIR: &str = ".detective-notes";

#[derive(Debug, Parser)]
#[command(name = "detective")]
#[command(about = "Solve mysteries by questioning suspects and weighing the evidence")]
struct Args {
    /// Seed for reproducible cases and replies. Falls back to DETECTIVE_SEED.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file of case templates. Falls back to DETECTIVE_TEMPLATES_FILE.
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Directory for detective notes. Falls back to DETECTIVE_NOTES_DIR.
    #[arg(long)]
    notes_dir: Option<PathBuf>,

    /// Answer immediately instead of simulating thinking time
    #[arg(long)]
    instant: bool,
}

fn build_config(args: &Args) -> InvestigationConfig {
    let mut config = InvestigationConfig::from_env();
    if args.instant {
        config = InvestigationConfig {
            seed: config.seed,
            templates_file: config.templates_file,
            mood_bias: config.mood_bias,
            ..InvestigationConfig::instant()
        };
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = &args.templates {
        config.templates_file = Some(path.clone());
    }
    config
}

fn notes_dir(args: &Args) -> PathBuf {
    args.notes_dir.clone().unwrap_or_else(|| {
        std::env::var("DETECTIVE_NOTES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_NOTES_DIR))
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they stay out of the transcript
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("detective=info".parse()?)
                .add_directive("investigation=info".parse()?)
                .add_directive("case_repository=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args);
    let notes = FileNotesStore::new(notes_dir(&args));
    info!("Keeping notes in {}", notes.dir().display());

    let mut detective = Detective::new(InvestigationSession::from_config(&config), notes);

    println!("Detective's desk. Type 'new' to take a case, 'help' for commands.");
    println!("{}", HELP);

    let mut stdout = std::io::stdout();
    repl::run(&mut detective, BufReader::new(stdin()), &mut stdout).await?;

    Ok(())
}
