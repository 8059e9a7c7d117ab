use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use synastry::worker::run_analysis;
use synastry::{Chart, Locale, SynastryAnalysisResult, SynastryEngine, SynastrySettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare two birth charts")]
struct Args {
    /// Chart JSON for person 1.
    chart_a: PathBuf,

    /// Chart JSON for person 2.
    chart_b: PathBuf,

    /// Optional TOML file with orb and finding overrides.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Language for interpretations and labels (en, hi).
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Print a short text summary instead of JSON.
    #[arg(long)]
    summary: bool,
}

fn load_chart(path: &Path) -> anyhow::Result<Chart> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse chart {}", path.display()))
}

fn print_summary(result: &SynastryAnalysisResult) {
    println!("Overall compatibility: {:.0}%", result.overall_compatibility);
    for category in &result.categories {
        println!("  {:<16} {:>4.1} / {:.0}", category.name, category.score, category.max_score);
    }
    println!(
        "Aspects: {} ({} harmonious, {} challenging)",
        result.aspects.len(),
        result.harmonious().count(),
        result.challenging().count()
    );
    for finding in &result.key_findings {
        println!("  - {}", finding);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => SynastrySettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => SynastrySettings::default(),
    };
    let engine = Arc::new(SynastryEngine::new(settings)?);
    let chart_a = Arc::new(load_chart(&args.chart_a)?);
    let chart_b = Arc::new(load_chart(&args.chart_b)?);

    log::info!(
        "Comparing {} with {}",
        args.chart_a.display(),
        args.chart_b.display()
    );
    let result = run_analysis(engine, chart_a, chart_b, args.locale).await?;

    if args.summary {
        print_summary(&result);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}
