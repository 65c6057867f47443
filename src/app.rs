/*
 * Application Module
 *
 * Model and per-frame update for the viewer. The viewer owns a World and
 * only ever changes it through the World's command surface: weight
 * updates from the sliders, obstacle and predator commands from the mouse,
 * and one tick per frame.
 */

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{info, warn};

use flocking::{DebugInfo, SimError, SimulationParams, World};

use crate::{input, renderer, ui};

// Longest step a single frame may advance, in ms
const MAX_TICK_MS: f32 = 100.0;

static PARAMS: OnceLock<SimulationParams> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "flocking", version, about = "Boid flocking with predators and obstacles")]
pub struct Cli {
    /// YAML file with simulation parameters; missing fields take defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of boids to create, overriding the configuration.
    #[arg(long)]
    pub boids: Option<usize>,

    /// Seed for every random decision, overriding the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn load_params(cli: &Cli) -> Result<SimulationParams, SimError> {
    let mut params = match &cli.config {
        Some(path) => SimulationParams::from_file(path)?,
        None => SimulationParams::default(),
    };
    if let Some(boids) = cli.boids {
        if !SimulationParams::get_num_boids_range().contains(&boids) {
            return Err(SimError::InvalidConfig("--boids must be between 0 and 2000"));
        }
        params.num_boids = boids;
    }
    if cli.seed.is_some() {
        params.seed = cli.seed;
    }
    params.validate()?;
    Ok(params)
}

// nannou builds the model from a plain fn, so parameters are handed over here
pub fn install_params(params: SimulationParams) {
    if PARAMS.set(params).is_err() {
        warn!("simulation parameters already installed");
    }
}

// Main model for the application
pub struct Model {
    pub world: World,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
    pub paused: bool,
    pub show_debug: bool,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = PARAMS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boids")
        .size(params.world_width as u32, params.world_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window was just created");
    let egui = Egui::from_window(&window);

    let (num_boids, radius, sight) = (params.num_boids, params.boid_radius, params.boid_sight);
    let mut world = World::new(params).expect("parameters were validated on load");
    world
        .populate(num_boids, radius, sight)
        .expect("parameters were validated on load");
    info!(boids = num_boids, "viewer ready");

    Model {
        world,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
        paused: false,
        show_debug: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let changes = ui::update_ui(
        &mut model.egui,
        &model.world,
        &model.debug_info,
        &mut model.paused,
        &mut model.show_debug,
    );
    for (kind, value) in changes {
        if let Err(err) = model.world.set_weight(kind, value) {
            warn!(%err, "rejected weight change");
        }
    }

    if !model.paused {
        let dt = (update.since_last.as_secs_f32() * 1000.0).min(MAX_TICK_MS);
        model.debug_info.last_tick = model.world.tick(dt);
        model.debug_info.ticks += 1;
    }
}
