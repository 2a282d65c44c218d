//! Curriculum registry: grades, grade points, subjects.
//!
//! The grade scale and the first-semester subject list are fixed at compile
//! time. Nothing here is mutated at runtime; the registry is a leaf component
//! with no dependencies on the rest of the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Letter grade on the institute's 10-point scale.
///
/// Closed enumeration: seven passing grades, a fail marker (`FF`) and a
/// not-applicable marker (`NA`). `FF` and `NA` both carry zero grade points
/// and do not count toward cleared credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    AA,
    AB,
    BB,
    BC,
    CC,
    CD,
    DD,
    FF,
    NA,
}

impl Grade {
    /// All grades in dropdown order, best first.
    pub const ALL: [Grade; 9] = [
        Grade::AA,
        Grade::AB,
        Grade::BB,
        Grade::BC,
        Grade::CC,
        Grade::CD,
        Grade::DD,
        Grade::FF,
        Grade::NA,
    ];

    /// The default grade for a fresh selection.
    pub const TOP: Grade = Grade::AA;

    /// Grade-point value. Total over the enumeration; `FF` and `NA` map to 0.
    pub fn points(self) -> u32 {
        match self {
            Grade::AA => 10,
            Grade::AB => 9,
            Grade::BB => 8,
            Grade::BC => 7,
            Grade::CC => 6,
            Grade::CD => 5,
            Grade::DD => 4,
            Grade::FF | Grade::NA => 0,
        }
    }

    /// Whether a subject with this grade counts toward cleared credits.
    pub fn is_cleared(self) -> bool {
        !matches!(self, Grade::FF | Grade::NA)
    }

    /// Two-letter code as shown in the UI.
    pub fn code(self) -> &'static str {
        match self {
            Grade::AA => "AA",
            Grade::AB => "AB",
            Grade::BB => "BB",
            Grade::BC => "BC",
            Grade::CC => "CC",
            Grade::CD => "CD",
            Grade::DD => "DD",
            Grade::FF => "FF",
            Grade::NA => "NA",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Grade::ALL
            .into_iter()
            .find(|g| g.code() == upper)
            .ok_or_else(|| format!("unknown grade '{s}' (expected one of AA..DD, FF, NA)"))
    }
}

/// Instruction type. Informational only -- not used in SGPA arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    Theory,
    Practical,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Theory => f.write_str("Theory"),
            SubjectKind::Practical => f.write_str("Practical"),
        }
    }
}

/// A single subject record. The code is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub kind: SubjectKind,
}

impl Subject {
    fn new(code: &str, name: &str, credits: u32, kind: SubjectKind) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            credits,
            kind,
        }
    }
}

/// Ordered, immutable subject list for one semester, with the credit total
/// precomputed as the SGPA denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    subjects: Vec<Subject>,
    total_credits: u32,
}

impl Curriculum {
    /// Build a curriculum from an ordered subject list.
    pub fn new(subjects: Vec<Subject>) -> Self {
        let total_credits = subjects.iter().map(|s| s.credits).sum();
        Self {
            subjects,
            total_credits,
        }
    }

    /// The fixed first-semester electrical engineering curriculum.
    pub fn first_semester() -> Self {
        Self::new(vec![
            Subject::new("MA101", "Engineering Mathematics-I", 4, SubjectKind::Theory),
            Subject::new("PH101", "Physics-I", 3, SubjectKind::Theory),
            Subject::new("EE101", "Basic Electrical Engineering", 4, SubjectKind::Theory),
            Subject::new("CS101", "Computer Programming", 3, SubjectKind::Theory),
            Subject::new("HU101", "Professional Communication", 2, SubjectKind::Theory),
            Subject::new("PH102", "Physics Laboratory", 1, SubjectKind::Practical),
            Subject::new("EE102", "Electrical Engineering Laboratory", 1, SubjectKind::Practical),
            Subject::new("CS102", "Computer Programming Laboratory", 1, SubjectKind::Practical),
            Subject::new("ME101", "Engineering Graphics", 2, SubjectKind::Practical),
        ])
    }

    /// Subjects in declaration order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Sum of all credit weights.
    pub fn total_credits(&self) -> u32 {
        self.total_credits
    }

    /// Look up a subject by code.
    pub fn subject(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }

    /// Whether `code` names a subject in this curriculum.
    pub fn contains(&self, code: &str) -> bool {
        self.subject(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn grade_point_table_is_total() {
        for grade in Grade::ALL {
            let points = grade.points();
            assert!(points <= 10, "{grade} maps outside 0..=10");
            if matches!(grade, Grade::FF | Grade::NA) {
                assert_eq!(points, 0);
                assert!(!grade.is_cleared());
            } else {
                assert!(points >= 4);
                assert!(grade.is_cleared());
            }
        }
    }

    #[test]
    fn grade_codes_round_trip() {
        for grade in Grade::ALL {
            let parsed: Grade = grade.code().parse().unwrap();
            assert_eq!(parsed, grade);
        }
        // Case-insensitive on input.
        assert_eq!("bb".parse::<Grade>().unwrap(), Grade::BB);
        assert!("XX".parse::<Grade>().is_err());
    }

    #[test]
    fn grade_serde_uses_two_letter_codes() {
        let json = serde_json::to_string(&Grade::AB).unwrap();
        assert_eq!(json, "\"AB\"");
        let back: Grade = serde_json::from_str("\"NA\"").unwrap();
        assert_eq!(back, Grade::NA);
    }

    #[test]
    fn first_semester_registry() {
        let curriculum = Curriculum::first_semester();
        assert_eq!(curriculum.subjects().len(), 9);
        assert_eq!(curriculum.total_credits(), 21);

        let codes: HashSet<_> = curriculum.subjects().iter().map(|s| &s.code).collect();
        assert_eq!(codes.len(), 9, "subject codes must be unique");

        for subject in curriculum.subjects() {
            assert!(subject.credits > 0, "{} has zero credits", subject.code);
        }
    }

    #[test]
    fn subject_lookup_by_code() {
        let curriculum = Curriculum::first_semester();
        let math = curriculum.subject("MA101").unwrap();
        assert_eq!(math.credits, 4);
        assert_eq!(math.kind, SubjectKind::Theory);
        assert!(curriculum.contains("EE101"));
        assert!(!curriculum.contains("ZZ999"));
    }
}
