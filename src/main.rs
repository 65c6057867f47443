/*
 * Boid Flocking Simulation
 *
 * Interactive viewer for the flocking world. Boids follow separation,
 * cohesion and alignment, steer around obstacles and flee predators.
 *
 * Controls:
 * - Left click: add a predator
 * - Right click: add an obstacle
 * - Middle click: remove the obstacle under the cursor
 * - Sliders adjust the four boid weights while the simulation runs
 *
 * Logging is configured through RUST_LOG (default "info").
 */

mod app;
mod input;
mod renderer;
mod ui;

use clap::Parser;
use flocking::SimError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimError> {
    init_tracing();

    let cli = app::Cli::parse();
    let params = app::load_params(&cli)?;
    app::install_params(params);

    nannou::app(app::model).update(app::update).run();
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
