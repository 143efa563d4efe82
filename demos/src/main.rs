//! Terminal grid walker.
//!
//! Run: cargo run --bin gridwalk -- --config demos/worlds/maze.json

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use gridwalk_core::{
    Coord, WorldConfig,
    app::{App, AppConfig},
};
use gridwalk_crossterm::CrosstermDriver;
use gridwalk_demo::{
    DemoError, Walker,
    config::{apply_overrides, load_world, parse_coord},
    headless_report, plan,
};

/// Animate an agent walking the shortest path to its target.
#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(version)]
struct Args {
    /// World description (JSON). Defaults to the built-in 5x5 world.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// Target cell as ROW,COL
    #[arg(long, value_parser = parse_coord)]
    target: Option<Coord>,

    /// Animation steps per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=120))]
    fps: u32,

    /// Print the path and exit instead of animating
    #[arg(long)]
    headless: bool,

    /// Log filter (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .parse_default_env()
        .init();

    log::info!("gridwalk v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let world = world_config(args)?;
    let plan = plan(&world)?;

    if args.headless {
        let (report, code) = headless_report(&plan.result);
        print!("{report}");
        return Ok(ExitCode::from(code));
    }

    let walker = Walker::new(plan);
    let screen = walker.screen_dims();
    let mut app = App::new(AppConfig {
        model: walker,
        driver: CrosstermDriver::new(),
        rows: screen.rows,
        cols: screen.cols,
        tick: Some(Duration::from_secs(1) / args.fps),
    });
    app.run()?;
    Ok(ExitCode::SUCCESS)
}

fn world_config(args: &Args) -> Result<WorldConfig, DemoError> {
    let mut world = match &args.config {
        Some(path) => load_world(path)?,
        None => WorldConfig::default(),
    };
    apply_overrides(&mut world, args.start, args.target);
    Ok(world)
}
