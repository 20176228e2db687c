//! CEA Simulator CLI
//!
//! Run regime scenarios, the critical-threshold scan and the parameter sweep.

use cea_core::SweepAxes;
use cea_sim::config::load_params;
use cea_sim::scenarios::ScenarioId;
use cea_sim::{default_threshold_autonomies, Exporter, ScenarioResult, ScenarioRunner, SimError};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Circular epistemic authority simulation CLI
#[derive(Parser, Debug)]
#[command(name = "cea-sim")]
#[command(about = "Simulate prevalence / confidence / autonomy feedback regimes", long_about = None)]
struct Args {
    /// Scenario to run (correction_dominant, baseline, amplification_dominant, critical, all, none)
    #[arg(short = 'S', long, default_value = "all")]
    scenario: String,

    /// Steps per trajectory (overrides the config file)
    #[arg(long)]
    steps: Option<usize>,

    /// JSON file with base parameters; missing fields use defaults
    #[arg(short, long)]
    config: Option<String>,

    /// Run the (alpha, autonomy) parameter sweep
    #[arg(long)]
    sweep: bool,

    /// Samples per sweep axis
    #[arg(long, default_value = "20")]
    sweep_samples: usize,

    /// Run the critical-threshold scan
    #[arg(long)]
    threshold: bool,

    /// Alpha used by the threshold scan
    #[arg(long, default_value = "0.1")]
    alpha: f64,

    /// Directory to write JSON results into
    #[arg(long)]
    export: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON summary on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    if !args.json {
        info!("CEA Simulator v{}", env!("CARGO_PKG_VERSION"));
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    let mut base = match &args.config {
        Some(path) => load_params(path)?,
        None => Default::default(),
    };
    if let Some(steps) = args.steps {
        base.step_count = steps;
    }
    base.validate()?;

    let scenarios: Vec<ScenarioId> = match args.scenario.as_str() {
        "all" => ScenarioId::all(),
        "none" => Vec::new(),
        name => vec![name.parse().map_err(SimError::UnknownScenario)?],
    };

    let exporter = args.export.as_deref().map(Exporter::new).transpose()?;
    let runner = ScenarioRunner::new().with_base(base);

    let results = runner.run_all(&scenarios);
    if !args.json {
        for r in &results {
            info!(
                "  Regime: {:<24} | {:<22} | Final prevalence: {:.3}",
                r.regime,
                r.scenario.name(),
                r.final_prevalence
            );
        }
    }
    if let Some(exporter) = &exporter {
        if !results.is_empty() {
            exporter.write_trajectories(&results)?;
        }
    }

    let threshold = if args.threshold {
        let analysis = runner.threshold_scan(args.alpha, &default_threshold_autonomies());
        if let Some(exporter) = &exporter {
            exporter.write_threshold(&analysis)?;
        }
        Some(analysis)
    } else {
        None
    };

    let sweep = if args.sweep {
        let result = runner.run_sweep(&SweepAxes::with_samples(args.sweep_samples));
        if let Some(exporter) = &exporter {
            exporter.write_sweep(&result)?;
        }
        Some(result)
    } else {
        None
    };

    if args.json {
        let summary = serde_json::json!({
            "results": results.iter().map(summarize).collect::<Vec<_>>(),
            "threshold": threshold,
            "critical_autonomies": sweep.as_ref().map(|s| s.critical_autonomies()),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!("Simulation complete.");
    }

    Ok(())
}

fn summarize(r: &ScenarioResult) -> serde_json::Value {
    serde_json::json!({
        "scenario": r.scenario.name(),
        "regime": r.regime,
        "alpha": r.params.alpha,
        "initial_autonomy": r.params.initial_autonomy,
        "total_correction": r.params.total_correction(),
        "final_prevalence": r.final_prevalence,
        "peak_prevalence": r.peak_prevalence,
    })
}
