use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    #[error(
        "Invalid coefficients: individual ({individual}) + collective ({collective}) must equal 4"
    )]
    InvalidCoefficients { individual: f64, collective: f64 },
    #[error("Invalid position bounds: min ({min}) must be below max ({max})")]
    InvalidPositionBounds { min: f64, max: f64 },
    #[error("Invalid velocity bounds: min ({min}) must be below max ({max})")]
    InvalidVelocityBounds { min: f64, max: f64 },
    #[error("Swarm must contain at least one particle")]
    EmptySwarm,
}

pub type SwarmResult<T> = Result<T, SwarmError>;

/// Which best position pulls a particle during the velocity update
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Topology {
    /// Swarm-wide best, taken once per iteration before any particle moves
    #[default]
    GlobalSnapshot,
    /// Swarm-wide best, recomputed before each particle moves
    GlobalPerParticle,
    /// Best personal best among the particle's ring neighbours
    Ring,
}

/// Configuration for the swarm. Fixed for the optimizer's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub dimension: usize,
    pub swarm_size: usize,
    /// Ring neighbourhood width; half of it is scanned on each side
    pub neighbors: usize,
    pub max_iterations: usize,
    pub velocity_min: f64,
    pub velocity_max: f64,
    /// Stop as soon as a particle's fitness equals this value exactly
    pub fitness_desired: f64,
    pub position_min: f64,
    pub position_max: f64,
    pub individual_coefficient: f64, // c1, pulls towards the personal best
    pub collective_coefficient: f64, // c2, pulls towards the reference best
    pub inertia_coefficient: f64,    // w
    pub topology: Topology,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            dimension: 2,
            swarm_size: 30,
            neighbors: 4,
            max_iterations: 100,
            velocity_min: -1.0,
            velocity_max: 1.0,
            fitness_desired: 0.0,
            position_min: -10.0,
            position_max: 10.0,
            individual_coefficient: 2.0,
            collective_coefficient: 2.0,
            inertia_coefficient: 0.7,
            topology: Topology::GlobalSnapshot,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> SwarmResult<()> {
        // Exact comparison; c1 + c2 = 4 is a hard requirement of the update rule.
        if self.individual_coefficient + self.collective_coefficient != 4.0 {
            return Err(SwarmError::InvalidCoefficients {
                individual: self.individual_coefficient,
                collective: self.collective_coefficient,
            });
        }

        if !(self.position_min < self.position_max) {
            return Err(SwarmError::InvalidPositionBounds {
                min: self.position_min,
                max: self.position_max,
            });
        }

        if !(self.velocity_min < self.velocity_max) {
            return Err(SwarmError::InvalidVelocityBounds {
                min: self.velocity_min,
                max: self.velocity_max,
            });
        }

        if self.swarm_size == 0 {
            return Err(SwarmError::EmptySwarm);
        }

        Ok(())
    }

    pub fn bounded_velocity(&self, value: f64) -> f64 {
        saturate(value, self.velocity_min, self.velocity_max)
    }

    pub fn bounded_position(&self, value: f64) -> f64 {
        saturate(value, self.position_min, self.position_max)
    }
}

fn saturate(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SwarmConfig::default().validate().is_ok());
    }

    #[test]
    fn test_each_bad_parameter_rejected_independently() {
        let config = SwarmConfig {
            individual_coefficient: 1.9,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SwarmError::InvalidCoefficients { .. })));

        let config = SwarmConfig {
            position_min: 10.0,
            position_max: -10.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SwarmError::InvalidPositionBounds { .. })));

        let config = SwarmConfig {
            velocity_min: 1.0,
            velocity_max: 1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SwarmError::InvalidVelocityBounds { .. })));

        let config = SwarmConfig {
            position_max: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SwarmError::InvalidPositionBounds { .. })));

        let config = SwarmConfig {
            swarm_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SwarmError::EmptySwarm));
    }

    #[test]
    fn test_saturation() {
        let config = SwarmConfig::default();
        assert_eq!(config.bounded_velocity(-3.0), -1.0);
        assert_eq!(config.bounded_velocity(3.0), 1.0);
        assert_eq!(config.bounded_velocity(0.25), 0.25);
        assert_eq!(config.bounded_position(-10.5), -10.0);
        assert_eq!(config.bounded_position(10.0), 10.0);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: SwarmConfig =
            serde_json::from_str(r#"{"dimension": 5, "topology": "Ring"}"#).unwrap();
        assert_eq!(config.dimension, 5);
        assert_eq!(config.swarm_size, 30);
        assert_eq!(config.topology, Topology::Ring);
    }
}
