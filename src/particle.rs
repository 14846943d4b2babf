//! A single member of the swarm
//!
//! Holds position, velocity and the best position seen so far. Fitness is
//! never cached: both `fitness` and `best_fitness` call the evaluator.

use crate::common::FitnessEvaluator;
use ndarray::Array1;

pub struct Particle<'a, E: FitnessEvaluator + ?Sized> {
    position: Array1<f64>,
    velocity: Array1<f64>,
    best_position: Array1<f64>,
    evaluator: &'a E,
}

impl<'a, E: FitnessEvaluator + ?Sized> Particle<'a, E> {
    /// Create a particle at the origin with zero velocity.
    /// The swarm overwrites all three vectors during initialization.
    pub fn new(dimension: usize, evaluator: &'a E) -> Self {
        Self {
            position: Array1::zeros(dimension),
            velocity: Array1::zeros(dimension),
            best_position: Array1::zeros(dimension),
            evaluator,
        }
    }

    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    pub fn position(&self, d: usize) -> f64 {
        self.position[d]
    }

    pub fn velocity(&self, d: usize) -> f64 {
        self.velocity[d]
    }

    pub fn best_position(&self, d: usize) -> f64 {
        self.best_position[d]
    }

    pub fn set_position(&mut self, d: usize, value: f64) {
        self.position[d] = value;
    }

    pub fn set_velocity(&mut self, d: usize, value: f64) {
        self.velocity[d] = value;
    }

    pub fn set_best_position(&mut self, d: usize, value: f64) {
        self.best_position[d] = value;
    }

    pub fn positions(&self) -> &Array1<f64> {
        &self.position
    }

    pub fn velocities(&self) -> &Array1<f64> {
        &self.velocity
    }

    pub fn best_positions(&self) -> &Array1<f64> {
        &self.best_position
    }

    /// Fitness of the current position
    pub fn fitness(&self) -> f64 {
        self.evaluator.fitness(&self.position)
    }

    /// Fitness of the best position, recomputed on every call
    pub fn best_fitness(&self) -> f64 {
        self.evaluator.fitness(&self.best_position)
    }

    /// Evaluate the current position and adopt it as the personal best on
    /// strict improvement. Returns the current fitness.
    pub fn update_best(&mut self) -> f64 {
        let fitness = self.fitness();
        if fitness < self.best_fitness() {
            self.best_position.assign(&self.position);
        }
        fitness
    }
}
