//! Selection state controller.
//!
//! The controller is the single source of truth for the grade selection and
//! knows nothing about rendering. The selection map is replaced wholesale on
//! every mutation (never patched in place) so observers can rely on simple
//! change detection. All mutations are synchronous and atomic from the
//! caller's point of view; every observation recomputes via the reducer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::advice::Advice;
use crate::curriculum::{Curriculum, Grade};
use crate::report::{self, SgpaReport};

/// Total mapping from subject code to selected grade.
///
/// Invariant: always has exactly one entry per curriculum subject.
pub type GradeSelection = BTreeMap<String, Grade>;

/// Owns the grade selection for one curriculum.
#[derive(Debug, Clone)]
pub struct SelectionController {
    curriculum: Curriculum,
    selection: GradeSelection,
}

impl SelectionController {
    /// Start with every subject at the top grade.
    pub fn new(curriculum: Curriculum) -> Self {
        let selection = default_selection(&curriculum);
        Self {
            curriculum,
            selection,
        }
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn selection(&self) -> &GradeSelection {
        &self.selection
    }

    /// Selected grade for `code`, if the code belongs to the curriculum.
    pub fn grade(&self, code: &str) -> Option<Grade> {
        self.selection.get(code).copied()
    }

    /// Replace the entry for `code` with `grade`, all other entries unchanged.
    ///
    /// `code` must already be a key; the totality invariant is enforced by
    /// construction, not validated here.
    pub fn set_grade(&mut self, code: &str, grade: Grade) {
        debug_assert!(self.curriculum.contains(code), "unknown subject {code}");
        let mut next = self.selection.clone();
        next.insert(code.to_string(), grade);
        self.selection = next;
    }

    /// Back to the default: every subject at the top grade.
    pub fn reset_all(&mut self) {
        self.selection = default_selection(&self.curriculum);
    }

    /// Full recomputation through the reducer.
    pub fn report(&self) -> SgpaReport {
        report::compute(&self.curriculum, &self.selection)
    }
}

fn default_selection(curriculum: &Curriculum) -> GradeSelection {
    curriculum
        .subjects()
        .iter()
        .map(|s| (s.code.clone(), Grade::TOP))
        .collect()
}

/// One interactive session: the selection controller plus the optional advice
/// text. This is the state an interactive shell holds; nothing is persisted
/// when the session ends.
#[derive(Debug, Clone)]
pub struct Session {
    controller: SelectionController,
    advice: Option<Advice>,
}

impl Session {
    pub fn new(curriculum: Curriculum) -> Self {
        Self {
            controller: SelectionController::new(curriculum),
            advice: None,
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn set_grade(&mut self, code: &str, grade: Grade) {
        self.controller.set_grade(code, grade);
    }

    /// Reset the selection and clear any displayed advice.
    pub fn reset_all(&mut self) {
        self.controller.reset_all();
        self.advice = None;
    }

    pub fn report(&self) -> SgpaReport {
        self.controller.report()
    }

    pub fn advice(&self) -> Option<&Advice> {
        self.advice.as_ref()
    }

    /// Store the latest advice. Last writer wins -- a response arriving after
    /// a reset still overwrites, which is acceptable for a display-only field.
    pub fn set_advice(&mut self, advice: Advice) {
        self.advice = Some(advice);
    }

    /// Serializable view of the whole session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selection: self.controller.selection().clone(),
            report: self.report(),
            advice: self.advice.clone(),
        }
    }
}

/// Full state snapshot, the shape emitted for `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub selection: GradeSelection,
    pub report: SgpaReport,
    pub advice: Option<Advice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::{Advice, FAILURE_FALLBACK};
    use crate::curriculum::Curriculum;

    #[test]
    fn new_controller_defaults_to_top_grade() {
        let curriculum = Curriculum::first_semester();
        let controller = SelectionController::new(curriculum.clone());
        assert_eq!(controller.selection().len(), curriculum.subjects().len());
        for subject in curriculum.subjects() {
            assert_eq!(controller.grade(&subject.code), Some(Grade::TOP));
        }
        assert_eq!(controller.report().sgpa, 10.00);
    }

    #[test]
    fn set_grade_changes_only_one_entry() {
        let mut controller = SelectionController::new(Curriculum::first_semester());
        let before = controller.selection().clone();
        controller.set_grade("PH101", Grade::CD);

        assert_eq!(controller.grade("PH101"), Some(Grade::CD));
        for (code, grade) in controller.selection() {
            if code != "PH101" {
                assert_eq!(before.get(code), Some(grade));
            }
        }
    }

    #[test]
    fn set_grade_is_last_write_wins() {
        let curriculum = Curriculum::first_semester();
        let mut twice = SelectionController::new(curriculum.clone());
        twice.set_grade("MA101", Grade::DD);
        twice.set_grade("MA101", Grade::BC);

        let mut once = SelectionController::new(curriculum);
        once.set_grade("MA101", Grade::BC);

        assert_eq!(twice.selection(), once.selection());
    }

    #[test]
    fn reset_all_is_idempotent() {
        let curriculum = Curriculum::first_semester();
        let mut controller = SelectionController::new(curriculum.clone());
        controller.set_grade("CS101", Grade::FF);
        controller.set_grade("ME101", Grade::NA);

        controller.reset_all();
        let after_once = controller.selection().clone();
        controller.reset_all();
        assert_eq!(controller.selection(), &after_once);
        assert_eq!(
            controller.selection(),
            SelectionController::new(curriculum).selection()
        );
    }

    #[test]
    fn session_reset_clears_advice() {
        let mut session = Session::new(Curriculum::first_semester());
        session.set_advice(Advice::fallback(FAILURE_FALLBACK));
        assert!(session.advice().is_some());

        session.reset_all();
        assert!(session.advice().is_none());
        assert_eq!(session.report().sgpa, 10.00);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut session = Session::new(Curriculum::first_semester());
        session.set_grade("EE101", Grade::BB);
        let snapshot = session.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.selection, snapshot.selection);
        assert_eq!(back.report, snapshot.report);
    }
}
