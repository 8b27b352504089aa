use log::{debug, info, warn};

use mindshare::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::export::config_reader::*;
use crate::export::io_common::Destination;
use crate::export::io_csv::{csv_file_name, write_csv, CsvQuoting};
use crate::export::io_json::InputSource;

pub mod config_reader;
pub mod demo;
pub mod io_common;
pub mod io_csv;
pub mod io_html;
pub mod io_json;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ExportError {
    #[snafu(display("Invalid JSON format. Please check your input. ({source})"))]
    ParsingJson { source: serde_json::Error },

    #[snafu(display("Error processing data: {source}"))]
    InvalidFormat { source: FormatError },

    #[snafu(display("{}", io_json::fetch_guidance(url)))]
    FetchUnavailable { url: String },

    #[snafu(display("Error reading input {path}: {source}"))]
    ReadingInput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Error opening configuration {path}: {source}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Error parsing configuration {path}: {source}"))]
    ParsingConfig {
        source: serde_json::Error,
        path: String,
    },

    #[snafu(display("Error writing {path}: {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Error writing CSV: {source}"))]
    WritingCsv { source: csv::Error },

    #[snafu(display("Nothing to read: pass --input, --demo or a configuration with sources"))]
    NoInput {},

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// The rows currently on display.
///
/// A successful ingest replaces everything at once. A failed ingest leaves the
/// previous rows in place.
#[derive(Debug, Default)]
pub struct RowStore {
    rows: Vec<ContributorRow>,
    summary: LeaderboardSummary,
    loaded: bool,
}

impl RowStore {
    pub fn rows(&self) -> &[ContributorRow] {
        &self.rows
    }

    pub fn summary(&self) -> LeaderboardSummary {
        self.summary
    }

    /// True once at least one document was ingested, even an empty one.
    pub fn has_data(&self) -> bool {
        self.loaded
    }

    pub fn ingest_document(&mut self, document: &JSValue) -> ExportResult<usize> {
        let rows = normalize_document(document).context(InvalidFormatSnafu {})?;
        self.summary = read_summary(document);
        self.rows = rows;
        self.loaded = true;
        Ok(self.rows.len())
    }

    pub fn ingest_text(&mut self, text: &str) -> ExportResult<usize> {
        let document = io_json::parse_document(text)?;
        self.ingest_document(&document)
    }
}

/// Everything an export run needs, after merging the command line and the configuration.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub inputs: Vec<InputSource>,
    pub csv: Option<Destination>,
    pub html: Option<Destination>,
    pub quoting: CsvQuoting,
    pub reference: Option<String>,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub rows: usize,
    pub failed_inputs: usize,
    pub csv_written: Option<String>,
    pub html_written: Option<String>,
}

fn resolve(base: Option<&Path>, p: &str) -> PathBuf {
    match base {
        Some(b) if Path::new(p).is_relative() => b.join(p),
        _ => PathBuf::from(p),
    }
}

pub fn build_settings(args: &Args) -> ExportResult<ExportSettings> {
    let (config, base) = match &args.config {
        Some(p) => {
            let config = read_config(p)?;
            info!("config: {:?}", config);
            let base = Path::new(p).parent().map(|d| d.to_path_buf());
            (config, base)
        }
        None => (ExportConfig::default(), None),
    };
    let base = base.as_deref();
    let out = &config.output_settings;

    let mut inputs: Vec<InputSource> = if !args.input.is_empty() {
        args.input.iter().map(|s| InputSource::parse(s)).collect()
    } else {
        config
            .sources
            .iter()
            .map(|s| InputSource::parse_relative(s, base))
            .collect()
    };
    if args.demo {
        inputs.push(InputSource::Demo);
    }
    ensure!(!inputs.is_empty(), NoInputSnafu {});

    let output_dir = resolve(base, out.output_directory.as_deref().unwrap_or("."));
    let csv = if args.no_csv {
        None
    } else if let Some(o) = &args.out {
        Some(Destination::parse(o))
    } else if out.generate_csv == Some(false) {
        None
    } else if let Some(name) = &out.csv_file_name {
        Some(Destination::File(output_dir.join(name)))
    } else {
        Some(Destination::Directory(output_dir))
    };

    let html = match (&args.html, &out.html_file) {
        (Some(h), _) => Some(Destination::parse(h)),
        (None, Some(h)) => Some(Destination::File(resolve(base, h))),
        (None, None) => None,
    };

    let quoting = if args.quote_csv || out.quote_csv_fields.unwrap_or(false) {
        CsvQuoting::Necessary
    } else {
        CsvQuoting::Never
    };

    Ok(ExportSettings {
        inputs,
        csv,
        html,
        quoting,
        reference: args.reference.clone(),
        now: Utc::now(),
    })
}

fn check_reference(path: &str, generated: &str) -> ExportResult<()> {
    let contents = fs::read_to_string(path).context(ReadingInputSnafu { path })?;
    let reference = contents.trim_end_matches(&['\r', '\n'][..]);
    if reference != generated {
        warn!("Found differences with the reference CSV");
        print_diff(reference, generated, "\n");
        whatever!(
            "Difference detected between generated CSV and reference CSV {}",
            path
        )
    }
    Ok(())
}

pub fn run_export(settings: &ExportSettings) -> ExportResult<ExportReport> {
    let mut store = RowStore::default();
    let mut errors: Vec<ExportError> = Vec::new();

    for src in settings.inputs.iter() {
        info!("Reading {}", src);
        let res = match src {
            InputSource::Inline(text) => store.ingest_text(text),
            _ => io_json::read_document(src).and_then(|js| store.ingest_document(&js)),
        };
        match res {
            Ok(n) => info!("Loaded {} contributors from {}", n, src),
            Err(e) => {
                warn!("Could not load {}: {:?}", src, e);
                errors.push(e);
            }
        }
    }

    // The last error is returned to the caller when nothing could be loaded.
    let failed_inputs = errors.len();
    let last_error = errors.pop();
    for e in errors.iter() {
        eprintln!("{}", e);
    }
    if !store.has_data() {
        return Err(last_error.unwrap_or(ExportError::NoInput {}));
    }
    if let Some(e) = last_error {
        eprintln!("{}", e);
    }

    let rows = store.rows();
    let summary = store.summary();
    info!(
        "{} contributors (unique yappers: {:?}, unique tweets: {:?})",
        rows.len(),
        summary.total_unique_yappers,
        summary.total_unique_tweets
    );

    let csv_text = write_csv(rows, settings.quoting)?;
    debug!("csv ({}): {:?}", io_csv::CSV_MIME_TYPE, csv_text);

    if let Some(reference) = &settings.reference {
        check_reference(reference, &csv_text)?;
    }

    let csv_written = match &settings.csv {
        Some(_) if rows.is_empty() => {
            warn!("No contributors: skipping the CSV export");
            None
        }
        Some(dest) => Some(dest.write(&csv_text, &csv_file_name(settings.now))?),
        None => None,
    };

    let html_written = match &settings.html {
        Some(dest) => {
            let page = io_html::render_page(rows, &summary, settings.now);
            Some(dest.write(&page, "community-mindshare.html")?)
        }
        None => None,
    };

    Ok(ExportReport {
        rows: rows.len(),
        failed_inputs,
        csv_written,
        html_written,
    })
}
