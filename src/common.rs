use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Objective supplied by the caller. Lower fitness is better.
///
/// Implementations must be pure: the swarm evaluates every particle at least
/// twice per iteration and never caches results.
pub trait FitnessEvaluator {
    /// The objective function to minimize.
    fn objective(&self, position: &Array1<f64>) -> f64;

    /// Optional constraints. Returns a penalty score (0 if all satisfied).
    fn penalty(&self, _position: &Array1<f64>) -> f64 {
        0.0
    }

    /// Combined fitness (objective + penalty).
    fn fitness(&self, position: &Array1<f64>) -> f64 {
        self.objective(position) + self.penalty(position)
    }
}

/// An evaluator defined by a closure.
pub struct FnEvaluator<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    pub objective_func: F,
}

impl<F> FnEvaluator<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    pub fn new(objective_func: F) -> Self {
        Self { objective_func }
    }
}

impl<F> FitnessEvaluator for FnEvaluator<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn objective(&self, position: &Array1<f64>) -> f64 {
        (self.objective_func)(position)
    }
}

/// The result of an optimization run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_variables: Array1<f64>,
    pub best_fitness: f64,
    /// Best fitness at the start of every executed iteration
    pub history: Vec<f64>,
    pub iterations: usize,
    /// True when some particle hit the desired fitness exactly
    pub solution_found: bool,
}
