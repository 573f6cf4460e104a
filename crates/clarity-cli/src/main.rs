//! Operator console for the clarity advisory.
//!
//! Drives refresh cycles over the core pipeline, prints the advisory
//! picture, and records manually approved interventions. Purely a driver:
//! all numeric semantics live in `clarity-core`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clarity_core::{
    bayesian_fuse, compute_evidence, default_priors, most_likely_state, ClaritySession,
    CycleSnapshot, InterventionAction,
};

#[derive(Parser, Debug)]
#[command(name = "clarity-console", about = "ATC clarity advisory console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run refresh cycles and print the advisory picture
    Run {
        /// Number of aircraft per cycle
        #[arg(long, default_value_t = 20)]
        aircraft: usize,

        /// Number of refresh cycles to run
        #[arg(long, default_value_t = 1)]
        cycles: usize,

        /// Base seed for reproducible telemetry; omit for live randomness.
        /// Each cycle reseeds with base + cycles-so-far.
        #[arg(long)]
        seed: Option<u64>,

        /// Record this intervention after the final cycle
        #[arg(long, value_enum)]
        log_action: Option<ActionArg>,

        /// Free-text rationale attached to the intervention
        #[arg(long, default_value = "")]
        note: String,

        /// Emit the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recompute the posterior from overridden inputs
    WhatIf {
        #[arg(long, default_value_t = 100.0)]
        clarity: f64,
        #[arg(long, default_value_t = 0)]
        conflicts: usize,
        #[arg(long, default_value_t = 0)]
        predicted: usize,
        #[arg(long, default_value_t = 0.0)]
        workload: f64,
        #[arg(long, default_value_t = 0.0)]
        comms: f64,
        /// Emit the posterior as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ActionArg {
    HoldDepartures,
    SpacingInstructions,
    AltitudeSeparation,
    MonitorOnly,
}

impl From<ActionArg> for InterventionAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::HoldDepartures => InterventionAction::HoldDepartures,
            ActionArg::SpacingInstructions => InterventionAction::SpacingInstructions,
            ActionArg::AltitudeSeparation => InterventionAction::AltitudeSeparation,
            ActionArg::MonitorOnly => InterventionAction::MonitorOnly,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clarity_core=info".parse()?)
                .add_directive("clarity_console=info".parse()?),
        )
        .init();

    match Cli::parse().command {
        Command::Run {
            aircraft,
            cycles,
            seed,
            log_action,
            note,
            json,
        } => run(aircraft, cycles, seed, log_action, note, json),
        Command::WhatIf {
            clarity,
            conflicts,
            predicted,
            workload,
            comms,
            json,
        } => what_if(clarity, conflicts, predicted, workload, comms, json),
    }
}

fn run(
    aircraft: usize,
    cycles: usize,
    seed: Option<u64>,
    log_action: Option<ActionArg>,
    note: String,
    json: bool,
) -> Result<()> {
    let mut session = ClaritySession::default();
    let mut last: Option<CycleSnapshot> = None;

    for _ in 0..cycles.max(1) {
        let cycle_seed = seed.map(|base| base + session.history().len() as u64);
        let snap = session.refresh_cycle(aircraft, cycle_seed);
        println!(
            "cycle {:>2}: clarity {:5.1}% | conflicts {} (predicted {}) | workload {:.2} | comms {:.2} | {}",
            session.history().len(),
            snap.clarity_pct,
            snap.conflicts.len(),
            snap.predicted_conflicts,
            snap.workload.index,
            snap.comms.fraction,
            snap.best_state,
        );
        last = Some(snap);
    }

    let snap = last.expect("at least one cycle ran");

    if let Some(action) = log_action {
        let record = session.record_intervention(action.into(), note)?;
        println!(
            "logged: {} at {}",
            record.action,
            record.timestamp.format("%Y-%m-%d %H:%M:%S")
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print_posterior(&snap.posterior);
        for conflict in &snap.conflicts {
            println!(
                "conflict: {} / {} | alt sep {} ft | {:.2} NM | {:?}",
                conflict.plane_a,
                conflict.plane_b,
                conflict.alt_sep_ft,
                conflict.lat_dist_nm,
                conflict.severity,
            );
        }
    }

    Ok(())
}

fn what_if(
    clarity: f64,
    conflicts: usize,
    predicted: usize,
    workload: f64,
    comms: f64,
    json: bool,
) -> Result<()> {
    let evidence = compute_evidence(clarity, conflicts, predicted, workload, comms);
    let posterior = bayesian_fuse(&default_priors(), &evidence);
    let best = most_likely_state(&posterior);

    if json {
        println!("{}", serde_json::to_string_pretty(&posterior)?);
    } else {
        print_posterior(&posterior);
        println!("most likely condition: {} ({:.1}%)", best, posterior[&best] * 100.0);
    }

    Ok(())
}

fn print_posterior(posterior: &clarity_core::StateMap) {
    println!("posterior:");
    for (state, p) in posterior {
        println!("  {:<9} {:5.1}%", state.to_string(), p * 100.0);
    }
}
