#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use balloon_overlay::common::types::{Dimensions, OverlayRect, Visibility};
use balloon_overlay::config::{
    BalloonSettings, ConfigSources, ConfigStore, DialogSettings, FloatingSettings, JumpSettings,
    VoiceSettings, WaifuSettings, settings,
};
use balloon_overlay::overlay::{OverlayGeometry, OverlayStyle, PaintOp};

#[derive(Parser)]
#[command(name = "balloon-overlay")]
#[command(version)]
#[command(about = "Resolve companion configuration and derive speech balloon layout", long_about = None)]
struct Cli {
    /// User override file (created from the bundled defaults if missing)
    #[arg(long, default_value = "config/config.properties")]
    config: PathBuf,

    /// Host window width in pixels
    #[arg(long, default_value_t = 1920, allow_negative_numbers = true)]
    window_width: i32,

    /// Host window height in pixels
    #[arg(long, default_value_t = 1080, allow_negative_numbers = true)]
    window_height: i32,

    /// Preferred content height, to show paint-time sizing
    #[arg(long)]
    content_height: Option<i32>,

    /// Plan the paint pass as if the balloon were shown
    #[arg(long)]
    show: bool,

    /// Print the resolved key/value pairs instead of the layout
    #[arg(long)]
    dump: bool,

    /// Also resolve the companion feature namespaces
    #[arg(long)]
    settings: bool,

    /// Emit JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct LayoutReport {
    window: Dimensions,
    visibility: Visibility,
    initial_placement: OverlayRect,
    desired_bounds: OverlayRect,
    fitted_bounds: Option<OverlayRect>,
    style: OverlayStyle,
    paint: Vec<PaintOp>,
}

/// Feature namespaces; a malformed value only fails its own namespace
#[derive(Serialize)]
struct SettingsReport {
    adapter: Result<String, String>,
    balloon: Result<BalloonSettings, String>,
    waifu: Result<WaifuSettings, String>,
    voice: Result<VoiceSettings, String>,
    dialogs: Result<DialogSettings, String>,
    floating: Result<FloatingSettings, String>,
    jump: Result<JumpSettings, String>,
}

impl SettingsReport {
    fn collect(store: &ConfigStore) -> Self {
        let show = |e: balloon_overlay::config::ConfigError| e.to_string();
        Self {
            adapter: settings::adapter(store).map_err(show),
            balloon: BalloonSettings::load(store).map_err(show),
            waifu: WaifuSettings::load(store).map_err(show),
            voice: VoiceSettings::load(store).map_err(show),
            dialogs: DialogSettings::load(store).map_err(show),
            floating: FloatingSettings::load(store).map_err(show),
            jump: JumpSettings::load(store).map_err(show),
        }
    }
}

fn build_layout(geometry: &OverlayGeometry, cli: &Cli) -> Result<LayoutReport> {
    let window = Dimensions::new(cli.window_width, cli.window_height);

    let initial_placement = geometry
        .initial_placement(window.width, window.height)
        .context("Failed to compute initial balloon placement")?;
    let desired_bounds = geometry
        .compute_desired_bounds(window.width, window.height)
        .context("Failed to compute desired balloon bounds")?;
    if !desired_bounds.fits_within(window) {
        warn!(bounds = ?desired_bounds, ?window, "Balloon extends outside the host window");
    }

    let fitted_bounds = cli
        .content_height
        .map(|height| geometry.fit_to_content(initial_placement, height))
        .transpose()
        .context("Failed to fit balloon to content")?;

    let style = geometry.style().context("Failed to resolve balloon style")?;
    let paint = geometry
        .plan_paint(fitted_bounds.unwrap_or(initial_placement))
        .context("Failed to plan balloon paint pass")?;

    Ok(LayoutReport {
        window,
        visibility: geometry.visibility(),
        initial_placement,
        desired_bounds,
        fitted_bounds,
        style,
        paint,
    })
}

fn print_layout(report: &LayoutReport) {
    let rect = |r: &OverlayRect| format!("x={} y={} {}x{}", r.x, r.y, r.width, r.height);

    println!(
        "window:            {}x{}",
        report.window.width, report.window.height
    );
    println!("visibility:        {:?}", report.visibility);
    println!("initial placement: {}", rect(&report.initial_placement));
    println!("desired bounds:    {}", rect(&report.desired_bounds));
    if let Some(fitted) = &report.fitted_bounds {
        println!("fitted bounds:     {}", rect(fitted));
    }
    println!(
        "font:              {} {}",
        report.style.font.family, report.style.font.size
    );
    println!(
        "colors:            fg {} bg {}",
        report.style.foreground.to_hex(),
        report.style.background.to_hex()
    );
    println!(
        "high quality:      background={} text={}",
        report.style.high_quality, report.style.high_quality_text
    );
    for op in &report.paint {
        println!("paint:             {op:?}");
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();

    let store = Arc::new(ConfigStore::new(ConfigSources::with_override_path(
        cli.config.clone(),
    )));
    let snapshot = store
        .resolve()
        .with_context(|| format!("Failed to resolve configuration from {:?}", cli.config))?;
    info!(
        entries = snapshot.len(),
        origin = ?snapshot.origin(),
        "Configuration ready"
    );

    if cli.dump {
        print!("{}", snapshot.to_properties());
        return Ok(());
    }

    if cli.settings {
        let report = SettingsReport::collect(&store);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut geometry = OverlayGeometry::new(Arc::clone(&store));
    geometry.toggle(cli.show);

    let report = build_layout(&geometry, &cli)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_layout(&report);
    }

    Ok(())
}
