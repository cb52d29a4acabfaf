//! Genetic TSP Solver Library
//!
//! A genetic algorithm solver for the Euclidean Traveling Salesman Problem.
//!
//! # Features
//!
//! - Elite selection with deterministic fitness ranking
//! - Ordered crossover (OX) between elite parents
//! - Per-position swap mutation
//! - Fully seeded, reproducible runs (ChaCha8 RNG)
//!
//! # Example
//!
//! ```no_run
//! use ga_tsp_solver::instance::TspInstance;
//! use ga_tsp_solver::genetic::{GeneticAlgorithm, GaConfig};
//!
//! let instance = TspInstance::from_file("instance.tsp").unwrap();
//!
//! let config = GaConfig::default();
//! let mut ga = GeneticAlgorithm::new(instance, config).unwrap();
//! let solution = ga.run();
//!
//! println!("Best distance: {:.2}", solution.cost);
//! ```

pub mod instance;
pub mod solution;
pub mod genetic;

pub use instance::TspInstance;
pub use solution::Solution;
