mod charts;
mod input;
mod model;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::input::{LoadedInput, load_dataset, resolve_recommended};
use crate::model::baseline::ReviewBaseline;
use crate::model::{BUILTIN_RECOMMENDED, MetricsError, builtin_dataset};
use crate::report::{DashboardInput, ReportFormat, write_reports};

const TOOL_NAME: &str = "triage-compare";

#[derive(Debug, Parser)]
#[command(name = TOOL_NAME, version, about = "Render moderation-model comparison dashboards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the dashboard artifacts into an output directory.
    Render {
        /// JSON dataset file; the built-in reference dataset is used when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output directory for the rendered artifacts.
        #[arg(long)]
        out: PathBuf,
        /// Which artifacts to write.
        #[arg(long, value_enum, default_value = "all")]
        report: FormatArg,
        /// Review population size behind the pictographic grid.
        #[arg(long, default_value_t = 100)]
        total_documents: u32,
        /// High-priority items in the review population; overrides the dataset file.
        #[arg(long)]
        high_priority: Option<u32>,
        /// Model to highlight; overrides the dataset file.
        #[arg(long)]
        recommend: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Html,
    Text,
    Json,
    All,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Html => ReportFormat::Html,
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::All => ReportFormat::All,
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), MetricsError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            input,
            out,
            report,
            total_documents,
            high_priority,
            recommend,
        } => {
            let loaded = match input {
                Some(path) => load_dataset(&path)?,
                None => LoadedInput {
                    dataset: builtin_dataset(),
                    recommended_model: Some(BUILTIN_RECOMMENDED.to_string()),
                    high_priority_total: None,
                },
            };
            let baseline = ReviewBaseline {
                total_documents,
                high_priority_count: resolve_high_priority(
                    high_priority,
                    loaded.high_priority_total,
                ),
            };
            let requested = recommend.or(loaded.recommended_model);
            let dashboard = DashboardInput {
                dataset: &loaded.dataset,
                recommended: resolve_recommended(&loaded.dataset, requested.as_deref()),
                baseline,
                tool_name: TOOL_NAME,
                tool_version: env!("CARGO_PKG_VERSION"),
            };
            write_reports(&dashboard, &out, report.into())?;
        }
    }
    Ok(())
}

fn resolve_high_priority(cli_value: Option<u32>, file_value: Option<u32>) -> u32 {
    cli_value
        .or(file_value)
        .unwrap_or(ReviewBaseline::default().high_priority_count)
}
