//! Solution representation for the genetic TSP solver.
//!
//! A `Solution` is the final, user-facing result of a run: the best tour
//! found, its cyclic length, and metadata about how it was produced.

use crate::instance::{City, TspInstance};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Represents a solution to a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The tour as a sequence of city ids
    pub tour: Vec<usize>,
    /// The tour resolved to city coordinates, in visiting order
    pub cities: Vec<City>,
    /// Total cyclic tour length
    pub cost: f64,
    /// Algorithm that generated this solution
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
    /// Number of generations run (if applicable)
    pub iterations: Option<usize>,
}

impl Solution {
    /// Create a solution from a tour, recomputing its cost
    pub fn from_tour(instance: &TspInstance, tour: Vec<usize>, algorithm: &str) -> Self {
        let cost = instance.tour_length(&tour);
        let cities = tour.iter().map(|&id| instance.cities[id]).collect();

        Solution {
            tour,
            cities,
            cost,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
            iterations: None,
        }
    }

    /// Check if every city is visited exactly once
    pub fn is_complete(&self, instance: &TspInstance) -> bool {
        if self.tour.len() != instance.dimension() {
            return false;
        }

        let unique: HashSet<usize> = self.tour.iter().cloned().collect();
        unique.len() == instance.dimension()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({})", self.algorithm)?;
        writeln!(f, "  Distance: {:.2}", self.cost)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        if let Some(iter) = self.iterations {
            writeln!(f, "  Generations: {}", iter)?;
        }
        writeln!(f, "  Tour: {:?}", self.tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_instance() -> TspInstance {
        TspInstance::from_cities("square", &[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
        ])
    }

    #[test]
    fn test_from_tour_computes_cost() {
        let instance = square_instance();
        let sol = Solution::from_tour(&instance, vec![0, 1, 2, 3], "test");

        assert!((sol.cost - 4.0).abs() < 1e-10);
        assert_eq!(sol.cities.len(), 4);
        assert_eq!(sol.cities[1].id, 1);
    }

    #[test]
    fn test_is_complete() {
        let instance = square_instance();

        let complete = Solution::from_tour(&instance, vec![3, 1, 0, 2], "test");
        assert!(complete.is_complete(&instance));

        let duplicated = Solution::from_tour(&instance, vec![0, 1, 1, 3], "test");
        assert!(!duplicated.is_complete(&instance));

        let short = Solution::from_tour(&instance, vec![0, 1, 2], "test");
        assert!(!short.is_complete(&instance));
    }
}
