/*
 * Debug Information Module
 *
 * TickStats summarizes one World::tick for logging and for the viewer.
 * DebugInfo adds the frame metrics the viewer displays next to them.
 */

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickStats {
    pub agents_updated: usize,
    // Sum of neighborhood sizes (after pruning) over every agent.
    pub neighbors_considered: usize,
    // Agents whose flock or prey set was sampled down.
    pub pruned_neighborhoods: usize,
    pub elapsed: Duration,
}

impl TickStats {
    pub fn average_neighbors(&self) -> f32 {
        if self.agents_updated == 0 {
            0.0
        } else {
            self.neighbors_considered as f32 / self.agents_updated as f32
        }
    }
}

// Debug information to display
#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub last_tick: TickStats,
    pub ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_empty_tick_is_zero() {
        assert_eq!(TickStats::default().average_neighbors(), 0.0);
        let stats = TickStats {
            agents_updated: 4,
            neighbors_considered: 10,
            ..TickStats::default()
        };
        assert_eq!(stats.average_neighbors(), 2.5);
    }
}
