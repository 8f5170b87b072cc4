//! `deskpet simulate` - headless run over a scene file.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::PetConfig;
use crate::error::DeskpetError;
use crate::platform::scene::{Scene, SceneBackend};
use crate::platform::{MonitorSource, ScreenRect};
use crate::simulation::{FrameInput, FrameOutput, IdleBehavior, Simulation};

/// Arguments of the simulate command.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  deskpet simulate scene.json                     # 150 frames, table output
  deskpet simulate scene.json --frames 600 --json # Full trajectory as JSON
  deskpet simulate scene.json --walk 1 --seed 42  # Walk right, reproducibly"#)]
pub struct SimulateArgs {
    /// Scene file describing monitors and windows.
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,

    /// Number of frames to simulate.
    #[arg(long, short, default_value_t = 150)]
    pub frames: u64,

    /// Frame rate, overriding the configuration.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Print every frame as JSON instead of a table.
    #[arg(long, short)]
    pub json: bool,

    /// Title of the pet's own window. Added to the scene if missing.
    #[arg(long, short, default_value = "Pet")]
    pub title: String,

    /// Base title shared by every pet instance.
    #[arg(long, default_value = "Pet")]
    pub base: String,

    /// Walking direction and speed factor (0 stands still).
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    pub walk: i32,

    /// Seed for the random rounding of walking steps.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Runs the scene and returns one output per frame.
///
/// # Errors
///
/// Returns an error if the scene cannot be loaded or the simulation cannot
/// be set up.
pub fn run_scene(args: &SimulateArgs, config: &PetConfig) -> Result<Vec<FrameOutput>, DeskpetError> {
    let mut config = config.clone();
    if let Some(fps) = args.fps {
        config.display.fps = fps;
    }
    let fps = config.display.fps();
    let (width, height) = config.display.window_size();

    let mut backend = SceneBackend::new(Scene::load(&args.scene)?);
    backend.ensure_window(&args.title, ScreenRect::from_origin_size(0, 0, width, height));
    let monitors = backend.monitors();

    let behavior = IdleBehavior::walking(args.walk);
    let mut sim = Simulation::new(config, backend, monitors, behavior, &args.base, args.title.as_str())?;
    if let Some(seed) = args.seed {
        sim.seed_rng(seed);
    }

    let dt = 1.0 / f64::from(fps);
    let mut outputs = Vec::new();
    for frame in 1..=args.frames {
        sim.window_system_mut().advance_to(frame);
        outputs.push(sim.tick(FrameInput::idle(dt))?);
    }
    tracing::info!(frames = args.frames, fps, "simulation finished");
    Ok(outputs)
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the simulation fails.
pub fn execute(args: &SimulateArgs, config: &PetConfig) -> Result<(), DeskpetError> {
    #[derive(Tabled)]
    struct FrameRow {
        #[tabled(rename = "Frame")]
        frame: u64,
        #[tabled(rename = "X")]
        x: i32,
        #[tabled(rename = "Y")]
        y: i32,
        #[tabled(rename = "Alpha")]
        alpha: String,
        #[tabled(rename = "State")]
        state: String,
        #[tabled(rename = "Animation")]
        animation: String,
        #[tabled(rename = "Below")]
        target: String,
    }

    let outputs = run_scene(args, config)?;

    if args.json {
        return output::print_json(&outputs);
    }

    if outputs.is_empty() {
        println!("{}", "No frames simulated.".dimmed());
        return Ok(());
    }

    let rows: Vec<FrameRow> = outputs
        .iter()
        .map(|o| FrameRow {
            frame: o.frame,
            x: o.position.0,
            y: o.position.1,
            alpha: format!("{:.2}", o.alpha),
            state: format!("{:?}", o.drop_state),
            animation: output::clip_name(o.animation.as_ref(), output::CLIP_COLUMN_WIDTH),
            target: output::stack_target(o.stack_target),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(0..4)).with(Alignment::right()))
        .to_string();

    println!("{}", format!("Trajectory ({} frames)", outputs.len()).bold());
    println!("{table}");
    Ok(())
}
