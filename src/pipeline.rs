//! End-to-end analysis run
//!
//! ```text
//! input file ─▶ text ─▶ FrequencyMap ─▶ ranked entries ─┬─▶ console table
//!                                                       ├─▶ word_frequencies.png
//!                                                       └─▶ zipf_analysis.txt
//! ```
//!
//! A run moves `Idle -> Running -> Completed | Failed`. Any I/O failure
//! stops the run at that step; files already written stay on disk.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::analysis::{ZipfAnalysis, ZipfAnalyzer, REPORT_FILE_NAME};
use crate::chart::{ChartRenderer, Dimensions, PlottersRenderer, CHART_FILE_NAME};
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::ranking::rank;
use crate::report::print_table;
use crate::text::{count_word_frequencies, extract_text};
use crate::utils::{absolute_path, format_bytes};

/// File the cleaned text of a wiki dump is saved to
pub const EXTRACTED_TEXT_FILE_NAME: &str = "extracted_text.txt";

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What to analyze and where to put the results
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Text file (or wiki XML dump) to read
    pub input: PathBuf,

    /// Directory receiving the chart and report
    pub output_dir: PathBuf,

    /// Treat the input as a Wikipedia XML dump
    pub wiki_dump: bool,
}

impl RunRequest {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            wiki_dump: false,
        }
    }

    /// Mark the input as a Wikipedia XML dump
    pub fn wiki_dump(mut self, wiki_dump: bool) -> Self {
        self.wiki_dump = wiki_dump;
        self
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total_tokens: u64,
    pub unique_words: usize,
    pub chart_path: PathBuf,
    pub report_path: PathBuf,
    pub analysis: ZipfAnalysis,
}

/// Write a status line to stdout, ignoring failures
fn announce(line: fmt::Arguments<'_>) {
    let mut out = io::stdout().lock();
    if let Err(e) = writeln!(out, "{line}") {
        tracing::debug!(error = %e, "Failed to write status line");
    }
}

/// Sequences reading, counting, ranking, reporting, charting and analysis
pub struct Pipeline<R = PlottersRenderer> {
    config: AnalyzerConfig,
    renderer: R,
    state: RunState,
}

impl Pipeline {
    /// Create a pipeline rendering charts with `plotters`
    pub fn new(config: AnalyzerConfig) -> Self {
        let renderer = PlottersRenderer::new(&config.chart);
        Self::with_renderer(config, renderer)
    }
}

impl<R: ChartRenderer> Pipeline<R> {
    /// Create a pipeline with a custom chart renderer
    pub fn with_renderer(config: AnalyzerConfig, renderer: R) -> Self {
        Self {
            config,
            renderer,
            state: RunState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "Pipeline state change");
        self.state = next;
    }

    /// Run the full analysis
    pub fn run(&mut self, request: &RunRequest) -> Result<RunSummary> {
        self.transition(RunState::Running);

        match self.execute(request) {
            Ok(summary) => {
                self.transition(RunState::Completed);
                Ok(summary)
            }
            Err(e) => {
                tracing::error!(error = %e, category = e.category().description(), "Analysis failed");
                self.transition(RunState::Failed);
                Err(e)
            }
        }
    }

    fn execute(&self, request: &RunRequest) -> Result<RunSummary> {
        announce(format_args!("Reading input file: {}", request.input.display()));
        let text = read_input(request)?;

        let frequencies = count_word_frequencies(&text);
        let total_tokens = frequencies.total_tokens();
        let unique_words = frequencies.len();
        tracing::info!(total_tokens, unique_words, "Counted words");

        let ranked = rank(frequencies);
        print_table(&ranked, self.config.report.top_n);

        let chart_path = request.output_dir.join(CHART_FILE_NAME);
        self.renderer
            .render(&ranked, &chart_path, Dimensions::from(&self.config.chart))?;
        announce(format_args!(
            "\nHistogram saved to: {}",
            absolute_path(&chart_path).display()
        ));

        let report_path = request.output_dir.join(REPORT_FILE_NAME);
        let analysis = ZipfAnalyzer::new(self.config.zipf.clone()).analyze(&ranked);
        analysis.save(&report_path)?;
        announce(format_args!(
            "\nZipf's law analysis saved to: {}",
            absolute_path(&report_path).display()
        ));

        Ok(RunSummary {
            total_tokens,
            unique_words,
            chart_path,
            report_path,
            analysis,
        })
    }
}

/// Read the input, extracting page text first for wiki dumps
fn read_input(request: &RunRequest) -> Result<String> {
    let raw = fs::read_to_string(&request.input).map_err(|e| Error::input(&request.input, e))?;
    tracing::info!(
        path = %request.input.display(),
        size = %format_bytes(raw.len() as u64),
        "Read input file"
    );

    if !request.wiki_dump {
        return Ok(raw);
    }

    let text = extract_text(&raw);
    let extracted_path = save_extracted(&request.output_dir, &text)?;
    announce(format_args!(
        "Extracted text saved to {}",
        extracted_path.display()
    ));
    Ok(text)
}

fn save_extracted(output_dir: &Path, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| Error::output(output_dir, e))?;

    let path = output_dir.join(EXTRACTED_TEXT_FILE_NAME);
    fs::write(&path, text).map_err(|e| Error::output(&path, e))?;
    Ok(path)
}
