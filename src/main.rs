use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zipf_analyzer::config::AnalyzerConfig;
use zipf_analyzer::error::{Error, ErrorCategory};
use zipf_analyzer::pipeline::{Pipeline, RunRequest};

#[derive(Parser)]
#[command(
    name = "zipf-analyzer",
    version,
    about = "Count word frequencies, chart them and test conformance with Zipf's law",
    long_about = None
)]
struct Cli {
    /// Text file to analyze
    input: PathBuf,

    /// Directory for the chart and report
    #[arg(default_value = ".")]
    output_dir: PathBuf,

    /// Treat the input as a Wikipedia XML dump
    #[arg(long)]
    wiki: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of words printed in the table
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Number of words plotted in the chart
    #[arg(long)]
    chart_words: Option<usize>,

    /// Chart width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Chart height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Number of words used for the regression
    #[arg(long)]
    max_words: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Cli {
    /// Merge defaults, config file, environment and flags
    fn load_config(&self) -> Result<AnalyzerConfig> {
        let base = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };
        let mut config = base.with_env()?;

        if let Some(top) = self.top {
            config.report.top_n = top;
        }
        if let Some(chart_words) = self.chart_words {
            config.chart.top_m = chart_words;
        }
        if let Some(width) = self.width {
            config.chart.width = width;
        }
        if let Some(height) = self.height {
            config.chart.height = height;
        }
        if let Some(max_words) = self.max_words {
            config.zipf.max_words = max_words;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ErrorCategory::Usage.exit_code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    setup_tracing(&cli.log_format, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error processing file: {e:#}");
            eprintln!("{e:?}");
            let code = e
                .downcast_ref::<Error>()
                .map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(
        input = %cli.input.display(),
        output_dir = %cli.output_dir.display(),
        wiki = cli.wiki,
        "Starting analysis"
    );

    let request = RunRequest::new(&cli.input, &cli.output_dir).wiki_dump(cli.wiki);
    let summary = Pipeline::new(config).run(&request)?;

    tracing::info!(
        unique_words = summary.unique_words,
        slope = summary.analysis.regression.slope,
        r_squared = summary.analysis.regression.r_squared,
        "Analysis completed successfully"
    );
    let _ = writeln!(
        io::stdout(),
        "\nAnalysis complete. Results written to {}",
        cli.output_dir.display()
    );
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("zipf_analyzer=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("zipf_analyzer=warn,warn"))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
