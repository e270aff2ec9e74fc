use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rust_nbody::clock::{FrameClock, SimDate};
use rust_nbody::file::read_file;
use rust_nbody::nbody::Simulation;

/// Runs a scenario without a display, one frame at a time, and reports where
/// everything ended up.
#[derive(Debug, Parser)]
struct Args {
    /// Scenario definition (.jdf)
    scenario: PathBuf,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 1000)]
    frames: usize,

    /// Wall-clock milliseconds each frame is assumed to take
    #[arg(long, default_value_t = 16.0)]
    frame_millis: f64,

    /// Advance by the scenario's show step every frame
    #[arg(long)]
    fixed_step: bool,

    /// Run time backwards
    #[arg(long)]
    reverse: bool,

    /// Only report this body
    #[arg(long)]
    body: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let scenario = read_file(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let mut clock = FrameClock::new(&scenario.params);
    if args.fixed_step {
        clock.set_fixed(true);
    }
    let date = SimDate::new(scenario.params.julian);

    let mut simulation = Simulation::new(scenario)?;
    if args.reverse {
        simulation.reverse();
    }
    let initial_energy = simulation.total_energy();

    for _ in 0..args.frames {
        simulation.elements_for_all();
        simulation.advance(clock.step_for_frame(args.frame_millis));
    }
    simulation.elements_for_all();

    let final_energy = simulation.total_energy();
    info!(elapsed = simulation.elapsed(), sub_step = simulation.sub_step(), "finished");

    println!("Date: {}", date.label(simulation.elapsed()));
    println!(
        "Relative energy drift: {:e}",
        (final_energy - initial_energy) / initial_energy.abs()
    );
    println!();

    for body in simulation.snapshot() {
        if let Some(wanted) = &args.body {
            if !body.name.eq_ignore_ascii_case(wanted) {
                continue;
            }
        }

        println!("{}", body.name);
        println!("- Position: {}", body.position.transpose());
        println!("- Velocity: {}", body.velocity.transpose());

        let elements = match body.elements {
            None => {
                println!();
                continue;
            }
            Some(elements) => elements,
        };
        println!("- Orbit type: {:?}", elements.orbit_type);
        println!("- Semi-major axis: {}", elements.a);
        println!("- Apoapsis: {:?}", elements.apoapsis());
        println!("- Periapsis: {}", elements.q);
        println!("- Eccentricity: {}", elements.e);
        println!("- Inclination: {}", elements.incl.to_degrees());
        println!("- Argument of periapsis: {}", elements.arg_peri.to_degrees());
        println!("- Longitude of ascending node: {}", elements.node.to_degrees());
        println!("- Longitude of periapsis: {}", elements.long_peri.to_degrees());
        println!("- Period (days): {:?}", elements.period);
        println!();
    }

    Ok(())
}
