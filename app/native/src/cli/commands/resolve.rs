//! `deskpet resolve` - one stacking pass over a scene file.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config::PetConfig;
use crate::error::DeskpetError;
use crate::physics::Plane;
use crate::platform::scene::{Scene, SceneBackend};
use crate::platform::{MonitorSource, StackTarget, WindowSystem};
use crate::stacking::{PassContext, Resolution, StackingResolver, TitlePeerNaming, build_world};

/// Arguments of the resolve command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Scene file describing monitors and windows.
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,

    /// Title of the window to resolve for. Must exist in the scene.
    #[arg(long, short, default_value = "Pet")]
    pub title: String,

    /// Base title shared by every pet instance.
    #[arg(long, default_value = "Pet")]
    pub base: String,

    /// Output as JSON.
    #[arg(long, short)]
    pub json: bool,
}

/// Runs a single resolver pass for the window titled `args.title`.
///
/// # Errors
///
/// Returns an error if the scene cannot be loaded, has no monitors, or does
/// not contain the window.
pub fn resolve_scene(args: &ResolveArgs, config: &PetConfig) -> Result<Resolution, DeskpetError> {
    let backend = SceneBackend::new(Scene::load(&args.scene)?);
    let handle = backend
        .find_window(&args.title)
        .ok_or_else(|| DeskpetError::WindowNotFound(args.title.clone()))?;
    let rect = backend.rect(handle).ok_or_else(|| DeskpetError::WindowNotFound(args.title.clone()))?;

    let world = build_world(
        &backend.monitors(),
        config.display.multi_monitors,
        f64::from(config.display.margin_bottom),
    )?;
    let mut plane = Plane::from_config(&config.physics, f64::from(rect.width()), f64::from(rect.height()));
    plane.set_world(world);
    plane.change_position(0.0, f64::from(rect.left), -f64::from(rect.bottom));

    let resolver = StackingResolver::new(TitlePeerNaming::new(args.base.as_str()));
    let ctx = PassContext {
        own_handle: Some(handle),
        own_title: &args.title,
        center_x: rect.left + rect.width() / 2,
        world_top: plane.border_top(),
        world_bottom: plane.border_bottom(),
        repulsion: config.behavior.peer_repulsion,
    };
    Ok(resolver.resolve(&backend.enumerate_windows(), &ctx))
}

/// Execute the resolve command.
///
/// # Errors
///
/// Returns an error if the pass cannot be run.
pub fn execute(args: &ResolveArgs, config: &PetConfig) -> Result<(), DeskpetError> {
    #[derive(Tabled)]
    struct BarrierRow {
        #[tabled(rename = "Y")]
        y: f64,
        #[tabled(rename = "X")]
        x: f64,
        #[tabled(rename = "Width")]
        width: f64,
        #[tabled(rename = "Ground")]
        ground: String,
    }

    #[derive(Tabled)]
    struct ChargeRow {
        #[tabled(rename = "Y")]
        y: f64,
        #[tabled(rename = "X")]
        x: f64,
        #[tabled(rename = "Charge")]
        charge: f64,
    }

    let resolution = resolve_scene(args, config)?;

    if args.json {
        return output::print_json(&resolution);
    }

    println!("{} {}", "Peer index:".bold(), output::peer_index(resolution.own_index));
    let target = match resolution.target {
        StackTarget::Topmost => output::stack_target(resolution.target),
        StackTarget::Beneath(handle) => format!("beneath {handle}"),
    };
    println!("{} {target}", "Stack target:".bold());

    println!("\n{}", format!("Barriers ({})", resolution.barriers.len()).bold());
    if resolution.barriers.is_empty() {
        println!("{}", "No barriers.".dimmed());
    } else {
        let rows = resolution.barriers.iter().map(|b| BarrierRow {
            y: b.y,
            x: b.x,
            width: b.width,
            ground: output::ground_marker(b.is_ground),
        });
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(0..3)).with(Alignment::right()))
            .with(Modify::new(Columns::new(3..4)).with(Alignment::center()))
            .to_string();
        println!("{table}");
    }

    println!("\n{}", format!("Point charges ({})", resolution.charges.len()).bold());
    if resolution.charges.is_empty() {
        println!("{}", "No point charges.".dimmed());
    } else {
        let rows = resolution.charges.iter().map(|c| ChargeRow { y: c.y, x: c.x, charge: c.quantity_product });
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(0..3)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::platform::WindowHandle;

    const SCENE: &str = r#"{
        "monitors": [{ "virtualOrigin": [0, 0], "size": [1920, 1080] }],
        "windows": [
            { "handle": 1, "title": "Pet", "rect": { "left": 100, "top": 0, "right": 300, "bottom": 300 } },
            { "handle": 2, "title": "Editor", "rect": { "left": 0, "top": 100, "right": 500, "bottom": 200 } },
            { "handle": 3, "title": "Pet (1)", "rect": { "left": 600, "top": 400, "right": 800, "bottom": 700 } }
        ]
    }"#;

    fn scene_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SCENE}").unwrap();
        file
    }

    fn args(file: &tempfile::NamedTempFile, title: &str) -> ResolveArgs {
        ResolveArgs {
            scene: file.path().to_path_buf(),
            title: title.to_string(),
            base: "Pet".to_string(),
            json: false,
        }
    }

    #[test]
    fn test_resolve_scene() {
        let file = scene_file();
        let resolution = resolve_scene(&args(&file, "Pet"), &PetConfig::default()).unwrap();
        assert_eq!(resolution.own_index, Some(0));
        assert_eq!(resolution.barriers.len(), 1);
        assert_eq!(resolution.charges.len(), 1);
        assert_eq!(resolution.target, StackTarget::Beneath(WindowHandle(3)));
    }

    #[test]
    fn test_resolve_unknown_title() {
        let file = scene_file();
        let result = resolve_scene(&args(&file, "Pet (9)"), &PetConfig::default());
        assert!(matches!(result, Err(DeskpetError::WindowNotFound(_))));
    }
}
