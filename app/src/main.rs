#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use holodict_config::Config;
use holodict_core::PersonRecord;
use holodict_export::{DictionarySink, MigakuSink, YomichanSink};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "holodict")]
#[command(about = "Hololive name/term dictionary exporter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build both dictionary files
    Build {
        /// Roster JSON to use instead of the embedded snapshot
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory to write into (defaults to the configured build dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Build only the Yomichan zip archive
    Yomichan {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Build only the Migaku tab-separated file
    Migaku {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

async fn load_records(input: Option<PathBuf>) -> anyhow::Result<Vec<PersonRecord>> {
    match input {
        Some(path) => holodict_dataset::load_from_path(&path).await,
        None => holodict_dataset::roster(),
    }
}

async fn run_sink(
    sink: &dyn DictionarySink,
    records: &[PersonRecord],
    build_dir: &Path,
) -> anyhow::Result<()> {
    let stats = sink.export(records, build_dir).await?;
    info!("{}: {} entries", sink.file_name(), stats.total());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, out_dir } => {
            let config = Config::load_or_default()?;
            let records = load_records(input).await?;
            let build_dir = out_dir.unwrap_or_else(|| config.output.build_dir.clone());
            info!(
                "Exporting {} records to {}",
                records.len(),
                build_dir.display()
            );

            let yomichan = YomichanSink::new(
                config.output.yomichan_file.clone(),
                config.dictionary.clone(),
            );
            run_sink(&yomichan, &records, &build_dir).await?;

            let migaku = MigakuSink::new(config.output.migaku_file.clone());
            run_sink(&migaku, &records, &build_dir).await?;
        }
        Commands::Yomichan { input, out_dir } => {
            let config = Config::load_or_default()?;
            let records = load_records(input).await?;
            let build_dir = out_dir.unwrap_or_else(|| config.output.build_dir.clone());

            let yomichan = YomichanSink::new(
                config.output.yomichan_file.clone(),
                config.dictionary.clone(),
            );
            run_sink(&yomichan, &records, &build_dir).await?;
        }
        Commands::Migaku { input, out_dir } => {
            let config = Config::load_or_default()?;
            let records = load_records(input).await?;
            let build_dir = out_dir.unwrap_or_else(|| config.output.build_dir.clone());

            let migaku = MigakuSink::new(config.output.migaku_file.clone());
            run_sink(&migaku, &records, &build_dir).await?;
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("holodict {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
