/*
 * Renderer Module
 *
 * Render sink for the viewer: draws every boid, predator and obstacle the
 * World reports after a tick, plus the grid and statistics in debug mode.
 * The window is centered on the world, so world coordinates in
 * [0, width) x [0, height) map onto screen coordinates by a fixed offset.
 */

use nannou::prelude::*;

use flocking::EntityKind;

use crate::app::Model;

pub fn world_to_screen(position: Vec2, world_size: Vec2) -> Vec2 {
    position - world_size / 2.0
}

pub fn screen_to_world(position: Vec2, world_size: Vec2) -> Vec2 {
    position + world_size / 2.0
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let world_size = model.world.size();

    if model.show_debug {
        draw_grid(&draw, model, world_size);
    }

    for item in model.world.render_items() {
        let center = world_to_screen(item.position, world_size);
        match item.kind {
            EntityKind::Obstacle => {
                draw.ellipse().xy(center).radius(item.radius).color(DARKGREEN);
            }
            EntityKind::Boid | EntityKind::Predator => {
                let color = if item.kind == EntityKind::Boid { RED } else { STEELBLUE };
                draw.ellipse().xy(center).radius(item.radius).color(color);
                draw.line()
                    .start(center)
                    .end(center + item.orientation)
                    .weight(2.0)
                    .color(BLACK);
            }
        }
    }

    if model.show_debug {
        draw_debug_info(&draw, model, app.window_rect());
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}

fn draw_grid(draw: &Draw, model: &Model, world_size: Vec2) {
    let grid = model.world.grid();
    let color = rgba(0.0, 0.0, 0.0, 0.08);

    for col in 0..=grid.cols {
        let x = (col as f32 * grid.cell_size).min(world_size.x);
        draw.line()
            .start(world_to_screen(vec2(x, 0.0), world_size))
            .end(world_to_screen(vec2(x, world_size.y), world_size))
            .color(color);
    }
    for row in 0..=grid.rows {
        let y = (row as f32 * grid.cell_size).min(world_size.y);
        draw.line()
            .start(world_to_screen(vec2(0.0, y), world_size))
            .end(world_to_screen(vec2(world_size.x, y), world_size))
            .color(color);
    }
}

// Draw debug information in the bottom-left corner
fn draw_debug_info(draw: &Draw, model: &Model, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 18.0;
    let stats = &model.debug_info.last_tick;

    let lines = [
        format!("FPS: {:.1}", model.debug_info.fps),
        format!("Boids: {}  Predators: {}", model.world.boid_count(), model.world.predator_count()),
        format!("Obstacles: {}", model.world.obstacles().len()),
        format!("Avg neighbors: {:.1}", stats.average_neighbors()),
        format!("Tick: {:.2} ms", stats.elapsed.as_secs_f64() * 1000.0),
    ];

    for (i, text) in lines.iter().enumerate() {
        let y = window_rect.bottom() + margin + (lines.len() - 1 - i) as f32 * line_height;
        draw.text(text)
            .x_y(window_rect.left() + margin + 90.0, y)
            .w(180.0)
            .left_justify()
            .color(BLACK)
            .font_size(12);
    }
}
