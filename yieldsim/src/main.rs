use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use yieldsim_core::{EvalContext, YieldResolver, YieldType, YieldsDelta};

mod loader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve modifiers into yield deltas", long_about = None)]
struct Args {
    /// Scenario file (JSON)
    #[arg(long)]
    scenario: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Abort on the first resolution error instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
struct YieldRow {
    amount: f64,
    percent: f64,
}

#[derive(Serialize)]
struct EvaluationOutput {
    modifier: String,
    yields: BTreeMap<&'static str, YieldRow>,
}

fn rows(delta: &YieldsDelta) -> BTreeMap<&'static str, YieldRow> {
    delta
        .iter()
        .filter(|(_, entry)| !entry.is_zero())
        .map(|(yield_type, entry)| {
            (
                yield_type.as_str(),
                YieldRow {
                    amount: entry.amount.to_f64(),
                    percent: entry.percent.to_f64(),
                },
            )
        })
        .collect()
}

fn print_table(label: &str, delta: &YieldsDelta) {
    println!("{}", label);
    if delta.is_empty() {
        println!("  (no change)");
        return;
    }
    for yield_type in YieldType::ALL {
        let entry = delta.entry(yield_type);
        if entry.is_zero() {
            continue;
        }
        println!(
            "  {:18} {:>10} {:>9}%",
            yield_type.as_str(),
            entry.amount,
            entry.percent
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let mut scenario = loader::load_scenario(&args.scenario)?;
    scenario.config.strict |= args.strict;

    let ctx = EvalContext {
        player: scenario.player,
        state: &scenario.state,
        data: &scenario.data,
        modifiers: &scenario.registry,
        subjects: &scenario.subjects,
    };
    let resolver = YieldResolver::new(ctx, scenario.config.clone())?;

    let mut outputs = Vec::new();
    let mut total = YieldsDelta::new();
    for evaluation in &scenario.evaluate {
        let modifier = scenario
            .registry
            .get(&evaluation.modifier)
            .with_context(|| format!("Unknown modifier in evaluate: {}", evaluation.modifier))?;
        let mut delta = YieldsDelta::new();
        resolver
            .apply_yields_for_subjects(&mut delta, &evaluation.subjects, modifier)
            .with_context(|| format!("Failed to resolve {}", evaluation.modifier))?;

        if args.format == Format::Table {
            print_table(modifier.id.as_str(), &delta);
        }
        outputs.push(EvaluationOutput {
            modifier: modifier.id.to_string(),
            yields: rows(&delta),
        });
        total.merge(delta);
    }

    match args.format {
        Format::Table => print_table("TOTAL", &total),
        Format::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
    }

    if !resolver.diagnostics().is_empty() {
        eprint!("{}", resolver.diagnostics().report());
    }
    Ok(())
}
