/*
 * Input Module
 *
 * Translates mouse events into World commands. Clicks over the egui
 * window are left to the UI.
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;
use crate::renderer::screen_to_world;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let point = screen_to_world(model.mouse_position, model.world.size());
    match button {
        MouseButton::Left => {
            model.world.add_predator(point);
        }
        MouseButton::Right => {
            model.world.add_obstacle(point);
        }
        MouseButton::Middle => {
            model.world.remove_obstacle(point);
        }
        _ => {}
    }
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
