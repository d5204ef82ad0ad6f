// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use geminatio::analysis::{RateValue, compare_documents, rate_table};
use geminatio::utils::logging::{
    format_error, format_heading, format_info, format_success, format_warning,
};
use geminatio::{
    Config, CountKey, DocumentCounts, GeminationAnnotator, JsonExporter, PipelineOrchestrator,
    RateConfig, UnitScope, Validator,
};
use geminatio::pipeline::PipelineRun;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "geminatio")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Gemination and number-word analysis for Latin verse corpora", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report lines (or clauses) in which a word-form is repeated
    Geminate {
        /// Corpus files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Forms to ignore, replaces the configured exclusions
        #[arg(short, long, value_name = "FORM")]
        exclude: Vec<String>,

        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Write the TSV report here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also write per-document JSON reports into this directory
        #[arg(long, value_name = "DIR")]
        json: Option<PathBuf>,
    },

    /// Count vocabulary occurrences and rates per document
    Count(CountArgs),

    /// Rank documents by total vocabulary rate
    Compare(CountArgs),
}

#[derive(Args)]
struct CountArgs {
    /// Corpus files or directories
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Vocabulary entries, replaces the configured vocabulary
    #[arg(long = "vocab", value_name = "WORD")]
    vocabulary: Vec<String>,

    #[arg(long, value_enum)]
    key: Option<KeyArg>,

    #[arg(long)]
    scale: Option<f64>,

    #[arg(long)]
    precision: Option<u32>,

    /// Write JSON reports into this directory
    #[arg(long, value_name = "DIR")]
    json: Option<PathBuf>,

    #[arg(short, long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Line,
    Clause,
}

impl From<ScopeArg> for UnitScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Line => UnitScope::Line,
            ScopeArg::Clause => UnitScope::Clause,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KeyArg {
    Surface,
    Lemma,
}

impl From<KeyArg> for CountKey {
    fn from(arg: KeyArg) -> Self {
        match arg {
            KeyArg::Surface => CountKey::Surface,
            KeyArg::Lemma => CountKey::Lemma,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    geminatio::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Geminate {
            paths,
            exclude,
            scope,
            output,
            json,
        } => {
            cmd_geminate(config, cli.color, paths, exclude, scope, output, json).await?;
        }
        Commands::Count(args) => {
            cmd_count(config, cli.color, args).await?;
        }
        Commands::Compare(args) => {
            cmd_compare(config, cli.color, args).await?;
        }
    }

    Ok(())
}

async fn run_pipeline(config: &Config, color: bool, paths: Vec<PathBuf>) -> Result<PipelineRun> {
    let start_time = Instant::now();

    let orchestrator = PipelineOrchestrator::new(config.clone())
        .context("Failed to initialize analysis pipeline")?
        .with_progress(true, color);
    let run = orchestrator.run(paths).await.context("Corpus analysis failed")?;

    for failure in &run.failures {
        eprintln!("{}", format_error(&format!("{}: {}", failure.path, failure.error)));
    }

    info!(
        "Analyzed {} documents in {:.2}s",
        run.reports.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(run)
}

async fn cmd_geminate(
    mut config: Config,
    color: bool,
    paths: Vec<PathBuf>,
    exclude: Vec<String>,
    scope: Option<ScopeArg>,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    if !exclude.is_empty() {
        config.gemination.exclusions = exclude;
    }
    if let Some(scope) = scope {
        config.gemination.scope = scope.into();
    }
    config.validate()?;

    if let Some(path) = &output {
        Validator::validate_output_file(path)?;
    }

    let run = run_pipeline(&config, color, paths).await?;

    let normalizer = geminatio::LatinNormalizer::new(config.normalization.clone());
    let annotator = GeminationAnnotator::new(
        &normalizer,
        config.gemination.marker_open.clone(),
        config.gemination.marker_close.clone(),
    );

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut total_hits = 0;
    for report in &run.reports {
        total_hits += annotator.write_report(&mut writer, &report.geminations)?;
    }
    writer.flush()?;
    drop(writer);

    if let Some(dir) = json {
        let mut exporter = JsonExporter::new(dir, true)?;
        for report in &run.reports {
            exporter.export_geminations(&report.document, report.total_units, &report.geminations)?;
        }
        exporter.finish()?;
    }

    let summary = format!(
        "{} geminated units across {} documents",
        total_hits,
        run.reports.len()
    );
    match &output {
        Some(path) => eprintln!("{}", format_success(&format!("{} -> {}", summary, path.display()))),
        None => eprintln!("{}", format_info(&summary)),
    }

    Ok(())
}

fn apply_count_args(config: &mut Config, args: &CountArgs) -> Result<RateConfig> {
    if !args.vocabulary.is_empty() {
        config.counting.vocabulary = args.vocabulary.clone();
    }
    if let Some(key) = args.key {
        config.counting.key = key.into();
    }
    if let Some(scale) = args.scale {
        config.counting.rate_scale = scale;
    }
    if let Some(precision) = args.precision {
        config.counting.rate_precision = precision;
    }
    config.validate()?;

    Ok(RateConfig::new(
        config.counting.rate_scale,
        config.counting.rate_precision,
    )?)
}

async fn cmd_count(mut config: Config, color: bool, args: CountArgs) -> Result<()> {
    let rate_config = apply_count_args(&mut config, &args)?;
    let run = run_pipeline(&config, color, args.paths.clone()).await?;

    let mut exporter = match &args.json {
        Some(dir) => Some(JsonExporter::new(dir, args.pretty)?),
        None => None,
    };

    let precision = rate_config.precision;
    for report in &run.reports {
        let counts = &report.counts;
        println!();
        println!(
            "{}",
            format_heading(&format!(
                "{} ({} tokens, key: {})",
                counts.name,
                counts.total_tokens,
                counts.key.as_str()
            ))
        );

        match rate_table(counts, &rate_config) {
            Ok(rates) => {
                for entry in &rates {
                    println!(
                        "  {:<12} {:>6} {:>10}",
                        entry.form,
                        entry.count,
                        entry.rate.display(precision)
                    );
                }
                if let Some(exporter) = exporter.as_mut() {
                    exporter.export_counts(counts, &rates)?;
                }
            }
            Err(e) => {
                for entry in counts.counts.iter() {
                    println!(
                        "  {:<12} {:>6} {:>10}",
                        entry.form,
                        entry.count,
                        RateValue::Skipped.display(precision)
                    );
                }
                println!("{}", format_warning(&format!("rates skipped: {}", e)));
                if let Some(exporter) = exporter.as_mut() {
                    exporter.export_counts(counts, &[])?;
                }
            }
        }
    }

    if let Some(exporter) = exporter {
        exporter.finish()?;
    }

    Ok(())
}

async fn cmd_compare(mut config: Config, color: bool, args: CountArgs) -> Result<()> {
    let rate_config = apply_count_args(&mut config, &args)?;
    let run = run_pipeline(&config, color, args.paths.clone()).await?;

    let counts: Vec<DocumentCounts> = run.reports.into_iter().map(|r| r.counts).collect();
    let comparison = compare_documents(&counts, &rate_config);

    println!();
    println!(
        "{}",
        format_heading(&format!(
            "Ranking by vocabulary rate per {} tokens",
            rate_config.scale
        ))
    );
    for ranked in &comparison.ranking {
        let line = format!(
            "  {:>3}. {:<32} {:>6} {:>10}",
            ranked.rank,
            ranked.name,
            ranked.total_count,
            ranked.total_rate.display(rate_config.precision)
        );
        if ranked.total_rate.is_skipped() {
            println!("{}", format_warning(line.trim_start()));
        } else {
            println!("{}", line);
        }
    }

    if let Some(dir) = &args.json {
        let mut exporter = JsonExporter::new(dir, args.pretty)?;
        exporter.export_comparison(&comparison)?;
        exporter.finish()?;
    }

    Ok(())
}
