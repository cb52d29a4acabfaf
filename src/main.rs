//! Genetic TSP Solver - Command Line Interface

use clap::{Parser, Subcommand};
use ga_tsp_solver::genetic::{GaConfig, GeneticAlgorithm};
use ga_tsp_solver::instance::TspInstance;

use std::path::PathBuf;
use std::time::Instant;

/// The 7-city demo set used when no instance file is given
const DEMO_CITIES: [(f64, f64); 7] = [
    (60.0, 200.0),
    (180.0, 200.0),
    (80.0, 180.0),
    (140.0, 180.0),
    (20.0, 160.0),
    (100.0, 160.0),
    (200.0, 160.0),
];

#[derive(Parser)]
#[command(name = "ga-tsp-solver")]
#[command(version = "1.0")]
#[command(about = "A genetic algorithm solver for the Euclidean TSP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance with the genetic algorithm
    Solve {
        /// Path to a TSP-LIB style instance file (omit for the built-in demo set)
        #[arg(short, long)]
        instance: Option<PathBuf>,

        /// Population size
        #[arg(short, long, default_value = "100")]
        population_size: usize,

        /// Number of elite routes preserved each generation
        #[arg(short, long, default_value = "20")]
        elite_size: usize,

        /// Per-position swap probability
        #[arg(short, long, default_value = "0.01")]
        mutation_rate: f64,

        /// Number of generations
        #[arg(short, long, default_value = "500")]
        generations: usize,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output solution to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze an instance
    Analyze {
        /// Path to the instance file
        #[arg(short, long)]
        instance: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            instance,
            population_size,
            elite_size,
            mutation_rate,
            generations,
            seed,
            output,
            verbose,
        } => {
            let config = GaConfig {
                population_size,
                elite_size,
                mutation_rate,
                generations,
                seed,
            };
            solve_instance(instance.as_deref(), config, output, verbose);
        }

        Commands::Analyze { instance } => {
            analyze_instance(&instance);
        }
    }
}

fn load_instance(path: Option<&std::path::Path>) -> TspInstance {
    match path {
        Some(p) => {
            println!("Loading instance from {:?}...", p);
            match TspInstance::from_file(p) {
                Ok(inst) => inst,
                Err(e) => {
                    eprintln!("Error loading instance: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => TspInstance::from_cities("demo7", &DEMO_CITIES),
    }
}

fn solve_instance(
    path: Option<&std::path::Path>,
    config: GaConfig,
    output: Option<PathBuf>,
    verbose: bool,
) {
    let instance = load_instance(path);

    if verbose {
        println!("{}", instance.statistics());
    }

    println!("Solving {} with the genetic algorithm...", instance.name);
    let start = Instant::now();

    let mut ga = match GeneticAlgorithm::new(instance.clone(), config) {
        Ok(ga) => ga,
        Err(e) => {
            eprintln!("Invalid parameters: {}", e);
            std::process::exit(1);
        }
    };

    let solution = ga.run();
    let elapsed = start.elapsed();

    println!("\n========== Results ==========");
    println!("Algorithm: {}", solution.algorithm);
    println!("Tour (city ids): {:?}", solution.tour);
    println!(
        "Tour (coordinates): {:?}",
        solution
            .cities
            .iter()
            .map(|c| (c.x, c.y))
            .collect::<Vec<_>>()
    );
    println!("Total distance: {:.2}", solution.cost);
    println!("Time: {:.4}s", elapsed.as_secs_f64());
    if let Some(iter) = solution.iterations {
        println!("Generations: {}", iter);
    }

    if verbose {
        println!("\nComplete tour: {}", solution.is_complete(&instance));
        println!("Final diversity: {:.2}", ga.population_diversity());
    }

    if let Some(out_path) = output {
        match serde_json::to_string_pretty(&solution) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&out_path, json) {
                    eprintln!("Failed to write output: {}", e);
                    std::process::exit(1);
                }
                println!("\nSolution saved to {:?}", out_path);
            }
            Err(e) => {
                eprintln!("Failed to serialize solution: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn analyze_instance(path: &std::path::Path) {
    let instance = match TspInstance::from_file(path) {
        Ok(inst) => inst,
        Err(e) => {
            eprintln!("Error loading instance: {}", e);
            std::process::exit(1);
        }
    };

    println!("========== Instance Analysis ==========\n");
    println!("{}", instance.statistics());
}
