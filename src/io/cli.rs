//! Command-line interface for corpus statistics and word cloud generation

use crate::corpus::Corpus;
use crate::io::configuration::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED};
use crate::io::error::{Result, file_system, invalid_argument};
use crate::io::progress::StageProgress;
use crate::io::report::{Report, ReportOptions};
use crate::io::source::{collect_files, read_source};
use crate::io::svg::{aggregate_cloud_path, cloud_directory, cloud_file_name, write_svg};
use crate::layout::placement::{ExhaustionPolicy, LayoutConfig, LayoutEngine, LayoutOutcome};
use crate::statistics::ngram::WindowRange;
use crate::text::filter::{ExclusionFilter, parse_word_file, parse_word_list};
use crate::text::tokenizer::CaseMode;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "textcloud")]
#[command(
    author,
    version,
    about = "Count words and n-grams across text files and draw word clouds"
)]
/// Command-line arguments for the analysis tool
// Report sections and layout policies are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Text file or directory to analyze (directories are searched recursively)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Do not report word counts
    #[arg(short = 'w', long)]
    pub no_words: bool,

    /// Do not report unique word counts
    #[arg(short = 'u', long)]
    pub no_unique: bool,

    /// Report each file separately
    #[arg(short, long)]
    pub per_file: bool,

    /// Ignore letter case when comparing words
    #[arg(short = 'c', long)]
    pub ignore_case: bool,

    /// Report the most frequent n-grams of this size
    #[arg(short = 'n', long = "ngrams", value_name = "SIZE", allow_negative_numbers = true)]
    pub ngram_size: Option<i64>,

    /// Count the final n-gram window of every file as well
    #[arg(long)]
    pub inclusive_windows: bool,

    /// Words to leave out, separated by commas or whitespace
    #[arg(short, long, value_name = "WORDS")]
    pub filter: Option<String>,

    /// File with one word to leave out per line
    #[arg(long, value_name = "PATH", conflicts_with = "filter")]
    pub filter_file: Option<PathBuf>,

    /// Report file, cloud file stem, or per-file cloud directory
    #[arg(short, long, value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Draw word clouds instead of printing statistics
    #[arg(long)]
    pub cloud: bool,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Collision retries per word before it is given up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Keep words that ran out of retries, overlapping others
    #[arg(long)]
    pub keep_overlapping: bool,

    /// Fail instead of writing a cloud where any word ran out of retries
    #[arg(long)]
    pub strict_layout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Tokenization case policy
    pub const fn case_mode(&self) -> CaseMode {
        CaseMode::from_ignore_case(self.ignore_case)
    }

    /// N-gram window convention
    pub const fn window(&self) -> WindowRange {
        if self.inclusive_windows {
            WindowRange::Inclusive
        } else {
            WindowRange::ExcludeLast
        }
    }

    /// Validated n-gram size, if n-grams were requested
    ///
    /// # Errors
    ///
    /// Returns an error if the size is smaller than one
    pub fn ngram_size(&self) -> Result<Option<usize>> {
        self.ngram_size
            .map(|size| {
                usize::try_from(size)
                    .ok()
                    .filter(|&size| size >= 1)
                    .ok_or_else(|| invalid_argument("ngrams", &size, &"n-gram size must be >= 1"))
            })
            .transpose()
    }

    /// Exclusion filter from `--filter` or `--filter-file`
    ///
    /// With `--ignore-case` the filter words are lowercased like the tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter file cannot be read
    pub fn exclusion_filter(&self) -> Result<ExclusionFilter> {
        let filter = match (&self.filter, &self.filter_file) {
            (Some(words), _) => parse_word_list(words),
            (None, Some(path)) => parse_word_file(path)?,
            (None, None) => ExclusionFilter::empty(),
        };

        Ok(if self.ignore_case {
            filter.to_ascii_lowercase()
        } else {
            filter
        })
    }

    /// Sections of the statistics report
    ///
    /// # Errors
    ///
    /// Returns an error if the n-gram size is invalid
    pub fn report_options(&self) -> Result<ReportOptions> {
        Ok(ReportOptions {
            words: !self.no_words,
            unique: !self.no_unique,
            per_document: self.per_file,
            ngram_size: self.ngram_size()?,
            window: self.window(),
        })
    }

    /// Layout parameters
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            max_attempts: self.max_attempts,
            policy: if self.keep_overlapping {
                ExhaustionPolicy::PlaceOverlapping
            } else {
                ExhaustionPolicy::Drop
            },
            ..LayoutConfig::default()
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one analysis described by the CLI arguments
pub struct Analyzer {
    cli: Cli,
}

impl Analyzer {
    /// Create an analyzer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the corpus and produce either the report or the word clouds
    ///
    /// # Errors
    ///
    /// Returns an error if the source path is invalid, an argument is
    /// invalid, or output cannot be written
    pub fn run(&self) -> Result<()> {
        // Validate arguments before touching the file system
        let options = self.cli.report_options()?;
        let corpus = self.load_corpus()?;

        if self.cli.cloud {
            self.render_clouds(&corpus)?;
            return Ok(());
        }

        let report = Report::build(&corpus, &options)?;
        match &self.cli.target {
            Some(path) => {
                let mut file =
                    std::fs::File::create(path).map_err(|e| file_system(path, "create report", e))?;
                report
                    .write_to(&mut file)
                    .map_err(|e| file_system(path, "write report", e))
            }
            None => report
                .write_to(&mut std::io::stdout().lock())
                .map_err(|e| file_system("<stdout>", "write report", e)),
        }
    }

    /// Read and tokenize every source file
    ///
    /// Files that cannot be read or decoded are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the source path is invalid or the filter file
    /// cannot be read
    pub fn load_corpus(&self) -> Result<Corpus> {
        let filter = self.cli.exclusion_filter()?;
        let files = collect_files(&self.cli.source)?;

        let progress = StageProgress::start("Reading", files.len(), self.cli.should_show_progress());
        let mut sources = Vec::with_capacity(files.len());
        for path in &files {
            match read_source(path) {
                Ok(source) => sources.push(source),
                Err(error) => warn!(error = %error, "document_skipped"),
            }
            progress.advance(path);
        }
        progress.finish();

        let (corpus, _skipped) = Corpus::load(sources, self.cli.case_mode(), filter);
        Ok(corpus)
    }

    /// Lay out and write the requested word clouds, returning written paths
    ///
    /// # Errors
    ///
    /// Returns an error if the aggregate cloud has no words, a strict layout
    /// is incomplete, or a file cannot be written
    pub fn render_clouds(&self, corpus: &Corpus) -> Result<Vec<PathBuf>> {
        let engine = LayoutEngine::new(self.cli.layout_config())?;
        let canvas = engine.config().canvas;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        if !self.cli.per_file {
            let outcome = self.accept(corpus.word_cloud(&engine, &mut rng)?, "<corpus>")?;
            let path = aggregate_cloud_path(self.cli.target.as_deref());
            write_svg(&outcome, &canvas, &path)?;
            info!(path = %path.display(), labels = outcome.labels.len(), "cloud_written");
            return Ok(vec![path]);
        }

        let directory = cloud_directory(self.cli.target.as_deref());
        let clouds = corpus.word_cloud_per_document(&engine, &mut rng);
        let progress = StageProgress::start("Drawing", clouds.len(), self.cli.should_show_progress());
        let mut written = Vec::with_capacity(clouds.len());

        for (identifier, outcome) in clouds {
            progress.advance(Path::new(&identifier));
            let outcome = match outcome {
                Ok(outcome) => self.accept(outcome, &identifier)?,
                Err(error) => {
                    warn!(document = %identifier, error = %error, "cloud_skipped");
                    continue;
                }
            };

            let path = directory.join(cloud_file_name(&identifier));
            write_svg(&outcome, &canvas, &path)?;
            info!(path = %path.display(), labels = outcome.labels.len(), "cloud_written");
            written.push(path);
        }
        progress.finish();

        Ok(written)
    }

    /// Surface unplaced labels, failing under `--strict-layout`
    fn accept(&self, outcome: LayoutOutcome, identifier: &str) -> Result<LayoutOutcome> {
        if !outcome.is_complete() {
            warn!(
                document = %identifier,
                exhausted = outcome.exhausted_count(),
                out_of_bounds = outcome.out_of_bounds_count(),
                "layout_incomplete"
            );
        }
        if self.cli.strict_layout {
            outcome.into_complete()
        } else {
            Ok(outcome)
        }
    }
}
