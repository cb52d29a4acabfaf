//! Genetic algorithm for the Euclidean TSP.
//!
//! Evolves a population of candidate tours with:
//! - Elite selection (top routes by fitness carried over unchanged)
//! - Ordered crossover (OX) between elite parents
//! - Per-position swap mutation on offspring
//!
//! Routes are immutable values: every reordering goes through
//! [`Route::new`], which recomputes the cyclic distance, so a cached
//! distance can never disagree with the city order.

use crate::instance::TspInstance;
use crate::solution::Solution;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ordered_float::OrderedFloat;

/// Individual in the genetic algorithm population
#[derive(Debug, Clone)]
pub struct Route {
    /// Ordered permutation of city ids
    pub order: Vec<usize>,
    /// Total cyclic tour distance
    pub distance: f64,
    /// Fitness (1 / distance, higher is better)
    pub fitness: f64,
}

impl Route {
    /// Build a route from a city order, computing distance and fitness.
    ///
    /// A zero-distance tour (only possible when all cities coincide) gets
    /// infinite fitness and outranks every finite route; ties among such
    /// routes are resolved by the stable sort in selection.
    pub fn new(order: Vec<usize>, instance: &TspInstance) -> Self {
        let distance = instance.tour_length(&order);
        let fitness = if distance > 0.0 {
            1.0 / distance
        } else {
            f64::INFINITY
        };

        Route {
            order,
            distance,
            fitness,
        }
    }
}

/// Genetic algorithm configuration
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Population size
    pub population_size: usize,
    /// Number of best routes preserved each generation
    pub elite_size: usize,
    /// Per-position swap probability during mutation
    pub mutation_rate: f64,
    /// Number of generations
    pub generations: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        GaConfig {
            population_size: 100,
            elite_size: 20,
            mutation_rate: 0.01,
            generations: 500,
            seed: 42,
        }
    }
}

impl GaConfig {
    /// Check parameter bounds before any computation starts
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 1 {
            return Err(format!(
                "population_size must be at least 1, got {}",
                self.population_size
            ));
        }
        if self.elite_size < 1 {
            return Err("elite_size must be at least 1 (offspring need parents)".to_string());
        }
        if self.elite_size > self.population_size {
            return Err(format!(
                "elite_size ({}) cannot exceed population_size ({})",
                self.elite_size, self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            ));
        }
        Ok(())
    }
}

/// Genetic algorithm implementation
pub struct GeneticAlgorithm {
    config: GaConfig,
    instance: TspInstance,
    population: Vec<Route>,
    best_route: Option<Route>,
    rng: ChaCha8Rng,
    generation: usize,
}

impl GeneticAlgorithm {
    /// Create a solver for an instance, failing fast on invalid parameters
    pub fn new(instance: TspInstance, config: GaConfig) -> Result<Self, String> {
        config.validate()?;

        if instance.dimension() == 0 {
            return Err("instance has no cities".to_string());
        }

        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(GeneticAlgorithm {
            config,
            instance,
            population: Vec::new(),
            best_route: None,
            rng,
            generation: 0,
        })
    }

    /// Fill the population with independent uniformly random permutations
    fn initialize_population(&mut self) {
        self.population.clear();

        for _ in 0..self.config.population_size {
            let mut order: Vec<usize> = (0..self.instance.dimension()).collect();
            order.shuffle(&mut self.rng);
            self.population.push(Route::new(order, &self.instance));
        }
    }

    /// Rank the population by descending fitness and keep the elite.
    ///
    /// The sort is stable, so fitness ties (including several
    /// infinite-fitness routes) break deterministically by position.
    fn select_elite(&self) -> Vec<Route> {
        let mut ranked = self.population.clone();
        ranked.sort_by_key(|r| OrderedFloat(-r.fitness));
        ranked.truncate(self.config.elite_size);
        ranked
    }

    /// Ordered crossover with explicit cut points (inclusive segment).
    ///
    /// Copies `parent1[start..=end]` into the child, then walks `parent2`
    /// in order and drops each city missing from the segment into the
    /// first empty slot, left to right. Parents must be permutations of
    /// the same city set; anything else leaves unfilled slots and is an
    /// internal-consistency bug.
    fn crossover_with_cuts(
        parent1: &[usize],
        parent2: &[usize],
        start: usize,
        end: usize,
    ) -> Vec<usize> {
        let n = parent1.len();
        let mut child = vec![usize::MAX; n];
        let mut in_segment = vec![false; n];

        for i in start..=end {
            child[i] = parent1[i];
            in_segment[parent1[i]] = true;
        }

        let mut remaining = parent2.iter().filter(|&&id| !in_segment[id]);
        for slot in child.iter_mut() {
            if *slot == usize::MAX {
                if let Some(&id) = remaining.next() {
                    *slot = id;
                }
            }
        }

        assert!(
            !child.contains(&usize::MAX),
            "crossover parents do not share the same city set"
        );

        child
    }

    /// Ordered crossover with uniformly drawn cut points
    fn order_crossover(&mut self, parent1: &[usize], parent2: &[usize]) -> Vec<usize> {
        let n = parent1.len();
        let a = self.rng.gen_range(0..n);
        let b = self.rng.gen_range(0..n);

        Self::crossover_with_cuts(parent1, parent2, a.min(b), a.max(b))
    }

    /// Per-position swap mutation; the swap target may equal the position
    /// itself, which is a legal no-op.
    fn mutate(&mut self, order: &mut [usize]) {
        let n = order.len();
        for i in 0..n {
            if self.rng.gen::<f64>() < self.config.mutation_rate {
                let j = self.rng.gen_range(0..n);
                order.swap(i, j);
            }
        }
    }

    /// One generational step: elite carry-over, then crossover + mutation
    /// to fill the remaining slots. Elite routes skip mutation.
    fn evolve(&mut self) {
        let elite = self.select_elite();
        let offspring_count = self.config.population_size - self.config.elite_size;

        let mut new_population = Vec::with_capacity(self.config.population_size);
        new_population.extend(elite.iter().cloned());

        for _ in 0..offspring_count {
            // parents drawn with replacement; a route may pair with itself
            let p1 = self.rng.gen_range(0..elite.len());
            let p2 = self.rng.gen_range(0..elite.len());

            let mut child = self.order_crossover(&elite[p1].order, &elite[p2].order);
            self.mutate(&mut child);

            new_population.push(Route::new(child, &self.instance));
        }

        self.population = new_population;
        self.generation += 1;

        // Only the generation's best is a candidate for best-ever;
        // min_by_key returns the first maximum, matching the stable rank order.
        if let Some(current_best) = self.population.iter().min_by_key(|r| OrderedFloat(-r.fitness))
        {
            let improved = match self.best_route {
                Some(ref best) => current_best.fitness > best.fitness,
                None => true,
            };
            if improved {
                self.best_route = Some(current_best.clone());
            }
        }
    }

    /// Run the genetic algorithm
    pub fn run(&mut self) -> Solution {
        let start = std::time::Instant::now();

        // Trivial instance: nothing to recombine
        if self.instance.dimension() < 2 {
            let order: Vec<usize> = (0..self.instance.dimension()).collect();
            let mut solution = Solution::from_tour(&self.instance, order, "GeneticAlgorithm");
            solution.computation_time = start.elapsed().as_secs_f64();
            solution.iterations = Some(0);
            return solution;
        }

        self.initialize_population();

        for _ in 0..self.config.generations {
            self.evolve();

            if let Some(ref best) = self.best_route {
                log::debug!(
                    "[GA] Gen {}  Best distance {:.3}  Diversity {:.2}",
                    self.generation,
                    best.distance,
                    self.population_diversity()
                );
            }
        }

        // With zero generations no generation best was ever recorded;
        // fall back to the best of the initial population.
        let best = self.best_route.clone().unwrap_or_else(|| {
            self.population
                .iter()
                .min_by_key(|r| OrderedFloat(-r.fitness))
                .cloned()
                .expect("population is never empty after initialization")
        });

        let mut solution = Solution::from_tour(&self.instance, best.order, "GeneticAlgorithm");
        solution.computation_time = start.elapsed().as_secs_f64();
        solution.iterations = Some(self.generation);

        solution
    }

    /// Get current best solution
    pub fn best_solution(&self) -> Option<Solution> {
        self.best_route
            .as_ref()
            .map(|r| Solution::from_tour(&self.instance, r.order.clone(), "GeneticAlgorithm"))
    }

    /// Get current generation
    pub fn current_generation(&self) -> usize {
        self.generation
    }

    /// Get population diversity (average positional disagreement)
    pub fn population_diversity(&self) -> f64 {
        if self.population.len() < 2 {
            return 0.0;
        }

        let sample = self.population.len().min(20);
        let mut total_diff = 0.0;
        let mut count = 0;

        for i in 0..sample {
            for j in i + 1..sample {
                let diff = self.population[i]
                    .order
                    .iter()
                    .zip(self.population[j].order.iter())
                    .filter(|(a, b)| a != b)
                    .count();
                total_diff += diff as f64;
                count += 1;
            }
        }

        total_diff / count as f64
    }
}
