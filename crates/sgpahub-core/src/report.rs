//! SGPA reducer.
//!
//! Pure recomputation over the curriculum and a total grade selection. No
//! caching and no incremental state: callers recompute from scratch on every
//! change, which is cheap at this scale.

use serde::{Deserialize, Serialize};

use crate::curriculum::{Curriculum, Grade};
use crate::selection::GradeSelection;

/// Result of one SGPA computation.
///
/// `sgpa` stores the half-up 2-decimal rounded value as canonical; the
/// unrounded quotient is not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SgpaReport {
    /// Σ grade points × credits over all subjects.
    pub total_weighted_points: u32,
    /// Weighted average, rounded to two decimals.
    pub sgpa: f64,
    /// Σ credits of subjects whose grade is neither FF nor NA.
    pub earned_credits: u32,
    /// The curriculum's credit total (SGPA denominator).
    pub total_credits: u32,
}

/// Compute the report for a selection that is total over the curriculum.
///
/// The selection is total by construction; a code missing from the map
/// contributes nothing, like an `NA` grade.
pub fn compute(curriculum: &Curriculum, selection: &GradeSelection) -> SgpaReport {
    let mut total_weighted_points = 0u32;
    let mut earned_credits = 0u32;

    for subject in curriculum.subjects() {
        let grade = selection
            .get(&subject.code)
            .copied()
            .unwrap_or(Grade::NA);
        total_weighted_points += grade.points() * subject.credits;
        if grade.is_cleared() {
            earned_credits += subject.credits;
        }
    }

    let total_credits = curriculum.total_credits();
    let sgpa = if total_credits == 0 {
        0.0
    } else {
        round2(f64::from(total_weighted_points) / f64::from(total_credits))
    };

    SgpaReport {
        total_weighted_points,
        sgpa,
        earned_credits,
        total_credits,
    }
}

/// Round half-up (ties away from zero) to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
