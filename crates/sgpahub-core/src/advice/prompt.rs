//! Prompt construction for the advice request.

use crate::curriculum::{Curriculum, Grade};
use crate::selection::GradeSelection;

/// Serialize curriculum, selection and SGPA into the natural-language prompt
/// sent to the generative service. Subjects appear in curriculum order; a
/// missing entry reads as NA.
pub fn build_advice_prompt(
    curriculum: &Curriculum,
    selection: &GradeSelection,
    sgpa: f64,
) -> String {
    let grades = curriculum
        .subjects()
        .iter()
        .map(|subject| {
            let grade = selection
                .get(&subject.code)
                .copied()
                .unwrap_or(Grade::NA);
            format!("{}: {}", subject.name, grade)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Context: 1st Semester Electrical Engineering student at SVNIT Surat.\n\
         Grades: {grades}.\n\
         SGPA: {sgpa:.2}.\n\
         Persona: A helpful senior or professor.\n\
         Goal: Provide encouraging advice using metaphors related to power systems \
         or nature. Focus on potential for the 2nd semester (Electrical Circuits, \
         Physics-II). Max 80 words."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Curriculum;
    use crate::selection::SelectionController;

    #[test]
    fn prompt_lists_every_subject_in_order() {
        let curriculum = Curriculum::first_semester();
        let mut controller = SelectionController::new(curriculum.clone());
        controller.set_grade("PH101", Grade::BC);

        let report = controller.report();
        let prompt = build_advice_prompt(&curriculum, controller.selection(), report.sgpa);

        assert!(prompt.contains("Physics-I: BC"));
        assert!(prompt.contains("Engineering Mathematics-I: AA"));
        assert!(prompt.contains(&format!("SGPA: {:.2}", report.sgpa)));
        assert!(prompt.contains("Max 80 words"));

        // Declaration order is preserved.
        let math = prompt.find("Engineering Mathematics-I").unwrap();
        let graphics = prompt.find("Engineering Graphics").unwrap();
        assert!(math < graphics);
    }
}
