use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use textreuse::{compare_documents, NormalizationContext, ReportFormat, TextReuseConfig};

/// Find sentence pairs two documents share, by counting common word
/// combinations.
#[derive(Debug, Parser)]
#[command(name = "textreuse", version, about)]
struct Cli {
    /// First document (UTF-8 text)
    doc_a: PathBuf,

    /// Second document (UTF-8 text)
    doc_b: PathBuf,

    /// Tokens per window
    #[arg(short = 'w', long)]
    window_size: Option<usize>,

    /// Tokens the window advances by
    #[arg(short = 's', long)]
    step: Option<usize>,

    /// Words per fingerprint
    #[arg(short = 'k', long)]
    arity: Option<usize>,

    /// Report pairs sharing more than this many fingerprints [default: 5]
    #[arg(short = 't', long)]
    threshold: Option<u64>,

    /// YAML run configuration
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory with orthographic_variants.txt, stopwords.txt and frequencies.txt
    #[arg(short = 'r', long)]
    resources: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Report format: tsv or jsonl
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Index both documents in parallel
    #[arg(long)]
    parallel: bool,

    /// Log filter, e.g. "info" or "textreuse=debug" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref(), cli.log_json)?;

    let mut config = match &cli.config {
        Some(path) => TextReuseConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TextReuseConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    let pipeline = config.pipeline_config()?;

    let normalize_cfg = config.canonical.to_normalize_config();
    let ctx = match cli.resources.as_ref().or(config.canonical.resources.as_ref()) {
        Some(dir) => NormalizationContext::from_resource_dir(normalize_cfg, dir)?,
        None => NormalizationContext::with_defaults(normalize_cfg)?,
    };

    let report = compare_documents(&cli.doc_a, &cli.doc_b, &ctx, &pipeline)?;

    let format = pipeline.matcher.format;
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report {}", path.display()))?;
            report.write(format, BufWriter::new(file))?;
        }
        None => report.write(format, io::stdout().lock())?,
    }

    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut TextReuseConfig, cli: &Cli) {
    if let Some(window_size) = cli.window_size {
        config.fingerprint.window_size = Some(window_size);
    }
    if let Some(step) = cli.step {
        config.fingerprint.step = Some(step);
    }
    if let Some(arity) = cli.arity {
        config.fingerprint.arity = Some(arity);
    }
    if let Some(threshold) = cli.threshold {
        config.matcher.threshold = threshold;
    }
    if let Some(format) = cli.format {
        config.matcher.format = format.as_str().to_string();
    }
    if cli.parallel {
        config.index.use_parallel = true;
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(level: Option<&str>, log_json: bool) -> anyhow::Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init()?;
    }
    Ok(())
}
