//! Starfish Collector headless runner.
//!
//! Runs the game without a window: the keyboard is scripted from the command
//! line and the simulation advances at a fixed frame rate for a fixed number
//! of frames. Status is logged once per simulated second.
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --hold right,up --frames 900
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use starfish_collector::app::App;
use starfish_collector::resources::gameconfig::GameConfig;
use starfish_collector::resources::gamestate::GameStates;
use starfish_collector::resources::input::{HeldKeys, Key};
use starfish_collector::resources::levellayout::LevelLayout;

/// Starfish Collector, headless.
#[derive(Parser)]
#[command(version, about = "Collect every starfish without meeting the shark.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON level layout. The built-in layout is used when absent.
    #[arg(long, value_name = "PATH")]
    layout: Option<String>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Keys held down during the level, comma separated (left,right,up,down).
    #[arg(long, value_delimiter = ',')]
    hold: Vec<Key>,

    /// Never press the start key.
    #[arg(long)]
    stay_on_menu: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let layout = match &cli.layout {
        Some(path) => match LevelLayout::load_from_file(path) {
            Ok(layout) => layout,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => LevelLayout::standard(),
    };

    let fps = if cli.fps > 0.0 { cli.fps } else { 60.0 };
    let dt = 1.0 / fps;
    let per_second = fps.round().max(1.0) as u32;

    let mut app = App::new(config, layout);
    let mut keys = HeldKeys::default();

    info!("Simulating {} frames at {} fps", cli.frames, fps);
    for frame in 0..cli.frames {
        if app.state() == GameStates::Menu && !cli.stay_on_menu {
            keys.press(Key::Start);
        } else {
            keys.release(Key::Start);
        }
        if app.state() == GameStates::Level {
            for key in &cli.hold {
                keys.press(*key);
            }
        }

        if let Err(e) = app.update(dt, &keys) {
            error!("Fatal: {}", e);
            return ExitCode::FAILURE;
        }

        if frame % per_second == 0 && app.state() == GameStates::Level {
            info!("t={:.1}s\n{}", frame as f32 * dt, app.status().text());
        }
    }

    let level = app.level();
    let stats = app.stats();
    match level.outcome {
        Some(outcome) => info!(
            "Outcome: {:?} ({} collected, {} effects)",
            outcome, stats.collected, stats.effects_spawned
        ),
        None => info!(
            "No outcome after {} frames in {:?} ({} collected)",
            cli.frames,
            app.state(),
            stats.collected
        ),
    }
    ExitCode::SUCCESS
}
