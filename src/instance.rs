//! Module for parsing and representing TSP instances.
//!
//! An instance is a set of 2D cities with a precomputed Euclidean distance
//! matrix. Cities are identified by their index in the input list, so two
//! cities with identical coordinates remain distinct.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use serde::{Deserialize, Serialize};

/// A city in the plane
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    /// City identifier (index into the instance's city list)
    pub id: usize,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        City { id, x, y }
    }

    /// Euclidean distance to another city
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A complete TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TspInstance {
    /// Name of the instance
    pub name: String,
    /// List of all cities
    pub cities: Vec<City>,
    /// Precomputed distance matrix
    #[serde(skip)]
    pub distance_matrix: Vec<Vec<f64>>,
}

impl TspInstance {
    /// Build an instance from raw coordinates, assigning ids 0..n
    pub fn from_cities(name: &str, coords: &[(f64, f64)]) -> Self {
        let cities: Vec<City> = coords.iter()
            .enumerate()
            .map(|(id, &(x, y))| City::new(id, x, y))
            .collect();
        let distance_matrix = Self::compute_distance_matrix(&cities);

        TspInstance {
            name: name.to_string(),
            cities,
            distance_matrix,
        }
    }

    /// Parse an instance from a TSP-LIB style coordinate file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let file = File::open(&path)
            .map_err(|e| format!("Cannot open file: {}", e))?;
        let reader = BufReader::new(file);

        let mut name = String::new();
        let mut coords: Vec<(f64, f64)> = Vec::new();
        let mut in_coords = false;

        for line in reader.lines() {
            let line = line.map_err(|e| format!("Read error: {}", e))?;
            let line = line.trim();

            if line.is_empty() || line == "EOF" {
                continue;
            }

            if line.starts_with("NAME:") {
                name = line.replace("NAME:", "").trim().to_string();
                continue;
            }
            if line.starts_with("DIMENSION:") || line.starts_with("COMMENT:") {
                continue;
            }
            if line.starts_with("NODE_COORD_SECTION") {
                in_coords = true;
                continue;
            }

            if in_coords {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() >= 3 {
                    let x: f64 = parts[1].parse().map_err(|_| "Invalid x coordinate")?;
                    let y: f64 = parts[2].parse().map_err(|_| "Invalid y coordinate")?;
                    coords.push((x, y));
                }
            }
        }

        if coords.is_empty() {
            return Err("No city coordinates found in file".to_string());
        }

        Ok(Self::from_cities(&name, &coords))
    }

    /// Compute Euclidean distance matrix
    fn compute_distance_matrix(cities: &[City]) -> Vec<Vec<f64>> {
        let n = cities.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = cities[i].distance_to(&cities[j]);
                }
            }
        }

        matrix
    }

    /// Get the distance between two cities
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distance_matrix[i][j]
    }

    /// Number of cities
    #[inline]
    pub fn dimension(&self) -> usize {
        self.cities.len()
    }

    /// Total cyclic tour length, including the closing edge back to the start
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }

        let mut length = 0.0;
        for i in 0..tour.len() - 1 {
            length += self.distance(tour[i], tour[i + 1]);
        }

        length += self.distance(tour[tour.len() - 1], tour[0]);

        length
    }

    /// Get statistics about the instance
    pub fn statistics(&self) -> InstanceStatistics {
        let mut distances: Vec<f64> = Vec::new();
        for i in 0..self.dimension() {
            for j in i + 1..self.dimension() {
                distances.push(self.distance(i, j));
            }
        }

        let avg_distance = if distances.is_empty() {
            0.0
        } else {
            distances.iter().sum::<f64>() / distances.len() as f64
        };
        let max_distance = distances.iter().cloned().fold(0.0, f64::max);

        InstanceStatistics {
            name: self.name.clone(),
            dimension: self.dimension(),
            avg_distance,
            max_distance,
        }
    }
}

/// Statistics about a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatistics {
    pub name: String,
    pub dimension: usize,
    pub avg_distance: f64,
    pub max_distance: f64,
}

impl std::fmt::Display for InstanceStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance: {}", self.name)?;
        writeln!(f, "  Cities: {}", self.dimension)?;
        writeln!(f, "  Avg distance: {:.2}", self.avg_distance)?;
        writeln!(f, "  Max distance: {:.2}", self.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_calculation() {
        let a = City::new(0, 0.0, 0.0);
        let b = City::new(1, 3.0, 4.0);

        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_matrix_symmetric() {
        let instance = TspInstance::from_cities("test", &[
            (0.0, 0.0),
            (3.0, 4.0),
            (6.0, 8.0),
        ]);

        for i in 0..3 {
            assert_eq!(instance.distance(i, i), 0.0);
            for j in 0..3 {
                assert!((instance.distance(i, j) - instance.distance(j, i)).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_unit_square_tour_length() {
        let instance = TspInstance::from_cities("square", &[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
        ]);

        let length = instance.tour_length(&[0, 1, 2, 3]);
        assert!((length - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_short_tours_have_zero_length() {
        let instance = TspInstance::from_cities("tiny", &[(5.0, 5.0)]);

        assert_eq!(instance.tour_length(&[]), 0.0);
        assert_eq!(instance.tour_length(&[0]), 0.0);
    }

    #[test]
    fn test_coincident_cities_stay_distinct() {
        let instance = TspInstance::from_cities("dup", &[
            (1.0, 1.0),
            (1.0, 1.0),
        ]);

        assert_eq!(instance.cities[0].id, 0);
        assert_eq!(instance.cities[1].id, 1);
        assert_eq!(instance.distance(0, 1), 0.0);
    }
}
