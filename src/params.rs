/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every
 * tunable of the flocking world, plus the four control weights that an
 * external UI may adjust between ticks. Parameters can be loaded from and
 * saved to YAML, and are validated before a World is built from them.
 */

use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::spatial_grid::SpatialGrid;

// Raw control units are divided by this to obtain force weights
pub const WEIGHT_SCALE: f32 = 100.0;

// The tunable boid weights exposed to the control sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightKind {
    Separation,
    Cohesion,
    Alignment,
    Avoidance,
}

impl WeightKind {
    pub const ALL: [WeightKind; 4] = [
        WeightKind::Separation,
        WeightKind::Cohesion,
        WeightKind::Alignment,
        WeightKind::Avoidance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeightKind::Separation => "Separation",
            WeightKind::Cohesion => "Cohesion",
            WeightKind::Alignment => "Alignment",
            WeightKind::Avoidance => "Avoidance",
        }
    }

    // Slider range in raw control units
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            WeightKind::Separation => 0.0..=200.0,
            WeightKind::Cohesion => 0.0..=50.0,
            WeightKind::Alignment => 0.0..=50.0,
            WeightKind::Avoidance => 0.0..=100.0,
        }
    }
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Weight values in raw control units, as a slider would report them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlWeights {
    pub separation: f32,
    pub cohesion: f32,
    pub alignment: f32,
    pub avoidance: f32,
}

impl Default for ControlWeights {
    fn default() -> Self {
        Self {
            separation: 0.0,
            cohesion: 0.0,
            alignment: 0.0,
            avoidance: 10.0,
        }
    }
}

impl ControlWeights {
    pub fn zero() -> Self {
        Self {
            separation: 0.0,
            cohesion: 0.0,
            alignment: 0.0,
            avoidance: 0.0,
        }
    }

    pub fn get(&self, kind: WeightKind) -> f32 {
        match kind {
            WeightKind::Separation => self.separation,
            WeightKind::Cohesion => self.cohesion,
            WeightKind::Alignment => self.alignment,
            WeightKind::Avoidance => self.avoidance,
        }
    }

    pub fn set(&mut self, kind: WeightKind, value: f32) -> Result<()> {
        // NaN fails this comparison too
        if !(value >= 0.0) {
            return Err(SimError::NegativeWeight { kind, value });
        }
        if value.is_infinite() {
            return Err(SimError::InvalidConfig("weights must be finite"));
        }
        match kind {
            WeightKind::Separation => self.separation = value,
            WeightKind::Cohesion => self.cohesion = value,
            WeightKind::Alignment => self.alignment = value,
            WeightKind::Avoidance => self.avoidance = value,
        }
        Ok(())
    }

    // Force weight for `kind`, i.e. the raw value mapped through `WEIGHT_SCALE`.
    pub fn scaled(&self, kind: WeightKind) -> f32 {
        self.get(kind) / WEIGHT_SCALE
    }
}

// Parameters for the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub world_width: f32,
    pub world_height: f32,
    pub num_boids: usize,
    pub boid_radius: f32,
    pub boid_sight: f32,
    pub predator_radius: f32,
    pub predator_sight: f32,
    pub obstacle_radius: f32,
    pub boid_max_speed: f32,
    // Units per millisecond, both speeds
    pub predator_max_speed: f32,
    // Per-component bound of the velocities drawn by `World::populate`.
    pub initial_speed_range: f32,
    pub cell_size: f32,
    // Oversized neighbor sets are randomly sampled down to this size
    pub max_neighbors: usize,
    pub weights: ControlWeights,
    // Performance settings
    pub enable_spatial_grid: bool,
    pub enable_parallel: bool,
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 480.0,
            num_boids: 10,
            boid_radius: 8.0,
            boid_sight: 80.0,
            predator_radius: 10.0,
            predator_sight: 100.0,
            obstacle_radius: 25.0,
            boid_max_speed: 0.1,
            predator_max_speed: 0.15,
            initial_speed_range: 15.0,
            cell_size: 40.0,
            max_neighbors: 15,
            weights: ControlWeights::default(),
            enable_spatial_grid: true,
            enable_parallel: true,
            seed: None,
        }
    }
}

impl SimulationParams {
    // Load parameters from a YAML file. Missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: SimulationParams = serde_yaml::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let floats = [
            self.world_width,
            self.world_height,
            self.boid_radius,
            self.boid_sight,
            self.predator_radius,
            self.predator_sight,
            self.obstacle_radius,
            self.boid_max_speed,
            self.predator_max_speed,
            self.initial_speed_range,
            self.cell_size,
        ];
        if floats.iter().any(|value| !value.is_finite()) {
            return Err(SimError::InvalidConfig("parameters must be finite"));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(SimError::InvalidConfig("world dimensions must be positive"));
        }
        // Also bounds the number of cells
        SpatialGrid::dimensions(self.cell_size, self.world_width, self.world_height)?;
        if !(self.boid_sight > 0.0 && self.predator_sight > 0.0) {
            return Err(SimError::InvalidConfig("sight must be positive"));
        }
        if self.boid_radius < 0.0 || self.predator_radius < 0.0 || self.obstacle_radius < 0.0 {
            return Err(SimError::InvalidConfig("radii must be non-negative"));
        }
        if !(self.boid_max_speed > 0.0) {
            return Err(SimError::InvalidConfig("boid_max_speed must be positive"));
        }
        if !(self.predator_max_speed > self.boid_max_speed) {
            return Err(SimError::InvalidConfig(
                "predator_max_speed must exceed boid_max_speed",
            ));
        }
        if self.initial_speed_range < 0.0 {
            return Err(SimError::InvalidConfig("initial_speed_range must be non-negative"));
        }
        if self.max_neighbors == 0 {
            return Err(SimError::InvalidConfig("max_neighbors must be at least 1"));
        }
        for kind in WeightKind::ALL {
            let value = self.weights.get(kind);
            if !(value >= 0.0) {
                return Err(SimError::NegativeWeight { kind, value });
            }
            if value.is_infinite() {
                return Err(SimError::InvalidConfig("weights must be finite"));
            }
        }
        Ok(())
    }

    pub fn get_num_boids_range() -> RangeInclusive<usize> {
        0..=2000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SimulationParams::default().validate().unwrap();
    }

    #[test]
    fn predator_must_outrun_boids() {
        let params = SimulationParams {
            predator_max_speed: 0.1,
            ..SimulationParams::default()
        };
        assert!(matches!(params.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let params = SimulationParams {
            cell_size: 0.0,
            ..SimulationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_weights_are_rejected() {
        let mut weights = ControlWeights::default();
        let err = weights.set(WeightKind::Cohesion, -1.0).unwrap_err();
        assert!(matches!(
            err,
            SimError::NegativeWeight { kind: WeightKind::Cohesion, .. }
        ));
        assert_eq!(weights.cohesion, 0.0);
        assert!(weights.set(WeightKind::Cohesion, f32::NAN).is_err());
    }

    #[test]
    fn scaled_weights_divide_by_one_hundred() {
        let mut weights = ControlWeights::zero();
        weights.set(WeightKind::Separation, 150.0).unwrap();
        assert!((weights.scaled(WeightKind::Separation) - 1.5).abs() < 1e-6);
        assert!((ControlWeights::default().scaled(WeightKind::Avoidance) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn partial_yaml_takes_defaults() {
        let yaml = "num_boids: 250\nweights:\n  cohesion: 12.0\nseed: 7\n";
        let params: SimulationParams = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params.num_boids, 250);
        assert_eq!(params.weights.cohesion, 12.0);
        assert_eq!(params.weights.avoidance, 10.0);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.cell_size, 40.0);
    }

    #[test]
    fn save_and_load_config_file() {
        let path = std::env::temp_dir().join(format!("flocking-params-{}.yaml", std::process::id()));
        let params = SimulationParams {
            num_boids: 42,
            seed: Some(3),
            ..SimulationParams::default()
        };
        params.save(&path).unwrap();
        let loaded = SimulationParams::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, params);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let err = SimulationParams::from_file("/nonexistent/flocking.yaml").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let cases = [
            SimulationParams { world_width: f32::INFINITY, ..SimulationParams::default() },
            SimulationParams { world_height: f32::NAN, ..SimulationParams::default() },
            SimulationParams { boid_sight: f32::INFINITY, ..SimulationParams::default() },
            SimulationParams { predator_sight: f32::INFINITY, ..SimulationParams::default() },
            SimulationParams { obstacle_radius: f32::NAN, ..SimulationParams::default() },
            SimulationParams { predator_max_speed: f32::INFINITY, ..SimulationParams::default() },
            SimulationParams { initial_speed_range: f32::INFINITY, ..SimulationParams::default() },
            SimulationParams { cell_size: f32::INFINITY, ..SimulationParams::default() },
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(SimError::InvalidConfig(_))),
                "accepted {params:?}"
            );
        }

        let mut params = SimulationParams::default();
        params.weights.separation = f32::INFINITY;
        assert!(params.validate().is_err());
        assert!(ControlWeights::default().set(WeightKind::Alignment, f32::INFINITY).is_err());
    }

    #[test]
    fn tiny_cell_size_is_rejected() {
        let params = SimulationParams {
            cell_size: 0.01,
            ..SimulationParams::default()
        };
        assert!(matches!(params.validate(), Err(SimError::InvalidConfig(_))));
    }
}
