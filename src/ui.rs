/*
 * UI Module
 *
 * Control sink for the viewer: egui sliders for the four boid weights in
 * raw control units, plus pause and debug toggles. Slider changes are
 * returned to the caller, which forwards them to World::set_weight.
 */

use nannou_egui::{egui, Egui};

use flocking::{DebugInfo, WeightKind, World};

pub fn update_ui(
    egui: &mut Egui,
    world: &World,
    debug_info: &DebugInfo,
    paused: &mut bool,
    show_debug: &mut bool,
) -> Vec<(WeightKind, f32)> {
    let mut changes = Vec::new();
    let weights = world.weights();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                for kind in WeightKind::ALL {
                    let mut value = weights.get(kind);
                    if ui
                        .add(egui::Slider::new(&mut value, kind.range()).text(kind.label()))
                        .changed()
                    {
                        changes.push((kind, value));
                    }
                }
            });

            ui.collapsing("Statistics", |ui| {
                let stats = &debug_info.last_tick;
                ui.label(format!("Ticks: {}", debug_info.ticks));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Neighbors considered: {}", stats.neighbors_considered));
                ui.label(format!("Pruned neighborhoods: {}", stats.pruned_neighborhoods));
            });

            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");
        });

    changes
}
