use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use plotters::prelude::*;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rust_nbody::file::read_file;
use rust_nbody::nbody::Simulation;

/// Plots the x-y paths of a scenario's bodies to a PNG.
#[derive(Debug, Parser)]
struct Args {
    scenario: PathBuf,

    /// Days to simulate
    #[arg(short, long, default_value_t = 365.25)]
    days: f64,

    /// Days between plotted points
    #[arg(long, default_value_t = 1.0)]
    interval: f64,

    #[arg(short, long, default_value = "plots/trails.png")]
    output: PathBuf,
}

struct Trail {
    name: String,
    colour: RGBColor,
    points: Vec<(f64, f64)>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.interval > 0.0, "interval must be positive");

    let scenario = read_file(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let mut simulation = Simulation::new(scenario)?;

    let mut trails: Vec<Trail> = simulation
        .bodies()
        .iter()
        .enumerate()
        .filter(|(_, body)| body.info.show_trail)
        .map(|(idx, body)| Trail {
            name: body.name().to_owned(),
            colour: body
                .info
                .colour
                .as_deref()
                .and_then(parse_colour)
                .unwrap_or_else(|| palette_colour(idx)),
            points: Vec::new(),
        })
        .collect();

    let mut t = 0.0;
    while t <= args.days {
        for (trail, body) in trails.iter_mut().zip(
            simulation
                .bodies()
                .iter()
                .filter(|body| body.info.show_trail),
        ) {
            let p = body.position();
            trail.points.push((p.x, p.y));
        }
        simulation.advance(args.interval);
        t += args.interval;
    }
    debug!(points = trails.iter().map(|t| t.points.len()).sum::<usize>(), "collected trails");

    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    draw_plot(&args.output, &trails).map_err(|e| anyhow::anyhow!("drawing plot: {}", e))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn draw_plot(path: &Path, trails: &[Trail]) -> Result<(), Box<dyn std::error::Error>> {
    // Square, centred on the barycenter, just big enough for every trail
    let extent = trails
        .iter()
        .flat_map(|t| t.points.iter())
        .map(|&(x, y)| x.abs().max(y.abs()))
        .fold(1e-3, f64::max)
        * 1.05;

    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&BLACK)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .axis_style(&WHITE)
        .label_style(("sans-serif", 12).into_font().color(&WHITE))
        .light_line_style(&TRANSPARENT)
        .draw()?;

    for trail in trails {
        let colour = trail.colour;
        chart
            .draw_series(LineSeries::new(trail.points.iter().copied(), &colour))?
            .label(trail.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &colour));
    }

    chart
        .configure_series_labels()
        .background_style(&BLACK.mix(0.8))
        .border_style(&WHITE)
        .label_font(("sans-serif", 12).into_font().color(&WHITE))
        .draw()?;

    root.present()?;
    Ok(())
}

fn palette_colour(idx: usize) -> RGBColor {
    let (r, g, b) = Palette99::pick(idx).rgb();
    RGBColor(r, g, b)
}

// Hex colours as they appear in scenario files, e.g. `#FFAA00`
fn parse_colour(s: &str) -> Option<RGBColor> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
