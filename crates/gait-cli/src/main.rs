//! Command-line gait analysis driver.
//!
//! Runs one rollout (optionally under a checkpointed policy), extracts the
//! inter-leg phases, and prints the four phase values and the cost.

use clap::Parser;
use gait::{
    AnalysisConfig, CheckpointStore, GaitReport, Limb, LinearPolicy, OscillatorConfig,
    OscillatorQuadruped, Policy, Precision, RolloutConfig, ZeroPolicy, analyze, run_rollout,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Analyze the gait produced by a trained locomotion policy")]
struct Args {
    /// Checkpoint folder name to load policy parameters from
    #[arg(short = 'c', long)]
    checkpoint_name: Option<String>,

    /// Checkpoint iteration to load
    #[arg(short = 'i', long)]
    checkpoint_iteration: Option<u64>,

    /// Root directory of the checkpoint store
    #[arg(long, default_value = "checkpoints")]
    checkpoint_dir: PathBuf,

    /// Simulation steps per rollout
    #[arg(long, default_value_t = 1000)]
    num_steps: usize,

    /// Steady-state window ratio in (0, 1]
    #[arg(long, default_value_t = 0.8)]
    window_ratio: f64,

    /// Forward velocity target in m/s
    #[arg(long, default_value_t = 0.375)]
    velocity_target: f64,

    /// Seed for the rollout's random draws
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Target phase offsets in rank order
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    phase_targets: Option<Vec<f64>>,

    /// Quantize rollout numerics through f32
    #[arg(long)]
    single_precision: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<GaitReport, String> {
    let precision = if args.single_precision {
        Precision::Single
    } else {
        Precision::Double
    };

    let mut env = OscillatorQuadruped::new(OscillatorConfig {
        velocity_target: args.velocity_target,
        ..Default::default()
    });
    let policy = load_policy(args)?;
    log::info!(
        "rollout: {} steps at velocity target {} m/s (seed {})",
        args.num_steps,
        args.velocity_target,
        args.seed
    );

    let series = run_rollout(
        &mut env,
        policy.as_ref(),
        &RolloutConfig {
            num_steps: args.num_steps,
            seed: args.seed,
            precision,
        },
    );

    let mut config = AnalysisConfig {
        window_ratio: args.window_ratio,
        ..Default::default()
    };
    if let Some(targets) = &args.phase_targets {
        config.targets = targets.clone();
    }

    let report = analyze(&series, &config).map_err(|err| err.to_string())?;
    for (limb, duty) in &report.duty_factors {
        log::info!("{limb} duty factor: {duty:.3}");
    }
    Ok(report)
}

fn load_policy(args: &Args) -> Result<Box<dyn Policy>, String> {
    match (&args.checkpoint_name, args.checkpoint_iteration) {
        (Some(name), Some(iteration)) => {
            let store = CheckpointStore::new(&args.checkpoint_dir);
            let params = store
                .load(name, iteration)
                .map_err(|err| err.to_string())?;
            let policy = LinearPolicy::from_params(&params).map_err(|err| err.to_string())?;
            log::info!("loaded checkpoint '{name}' iteration {iteration}");
            Ok(Box::new(policy))
        }
        (None, None) => Ok(Box::new(ZeroPolicy::new(4))),
        _ => Err("checkpoint name and iteration must be given together".into()),
    }
}

fn print_report(report: &GaitReport) {
    let titles = [
        (Limb::FrontRight, "Front Right"),
        (Limb::FrontLeft, "Front Left"),
        (Limb::HindRight, "Hind Right"),
        (Limb::HindLeft, "Hind Left"),
    ];
    for (limb, title) in titles {
        let phase = report
            .phases
            .iter()
            .find(|(l, _)| *l == limb)
            .map(|(_, p)| *p)
            .unwrap_or(0.0);
        println!("{title} Phase: {phase:.3}");
    }
    println!("Cost: {:.3}", report.cost);
}
