//! Tour checks.

use super::types::{DistanceMatrix, TspSolution};
use crate::validation::{Verdict, Violation};

/// Checks that the tour is closed at `start_city`, visits every city
/// exactly once, and that its recomputed length matches the report.
pub fn validate_tour(matrix: &DistanceMatrix, start_city: usize, solution: &TspSolution) -> Verdict {
    let n = matrix.len();
    let tour = &solution.tour;

    if tour.len() != n + 1 {
        return Err(Violation::Shape(format!(
            "tour has {} stops, expected {}",
            tour.len(),
            n + 1
        )));
    }
    if tour.first() != Some(&start_city) || tour.last() != Some(&start_city) {
        return Err(Violation::TourEndpoints(start_city));
    }

    let mut seen = vec![false; n];
    for &city in &tour[..n] {
        if city >= n || seen[city] {
            return Err(Violation::CityCoverage(city));
        }
        seen[city] = true;
    }

    let actual = matrix.route_distance(tour);
    if actual != solution.distance {
        return Err(Violation::DistanceMismatch {
            reported: solution.distance,
            actual,
        });
    }
    Ok(())
}
