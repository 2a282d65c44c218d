pub mod advice;
pub mod config;
pub mod grades;
pub mod report;
pub mod subjects;

use sgpahub_core::{Grade, Session};

/// Parse `CODE=GRADE` override arguments and apply them to the session.
///
/// Validation lives here at the edge: the core controller assumes codes are
/// valid by construction.
pub fn apply_grade_overrides(
    session: &mut Session,
    overrides: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in overrides {
        let (code, grade) = entry
            .split_once('=')
            .ok_or_else(|| format!("invalid override '{entry}' (expected CODE=GRADE)"))?;
        let code = code.trim().to_ascii_uppercase();
        if !session.controller().curriculum().contains(&code) {
            return Err(format!("unknown subject code: {code}").into());
        }
        let grade: Grade = grade.trim().parse()?;
        session.set_grade(&code, grade);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgpahub_core::Curriculum;

    #[test]
    fn overrides_apply_in_order() {
        let mut session = Session::new(Curriculum::first_semester());
        apply_grade_overrides(
            &mut session,
            &["ma101=bb".to_string(), "PH101=FF".to_string()],
        )
        .unwrap();
        assert_eq!(session.controller().grade("MA101"), Some(Grade::BB));
        assert_eq!(session.controller().grade("PH101"), Some(Grade::FF));
    }

    #[test]
    fn bad_overrides_are_rejected() {
        let mut session = Session::new(Curriculum::first_semester());
        assert!(apply_grade_overrides(&mut session, &["MA101".to_string()]).is_err());
        assert!(apply_grade_overrides(&mut session, &["ZZ999=AA".to_string()]).is_err());
        assert!(apply_grade_overrides(&mut session, &["MA101=XX".to_string()]).is_err());
    }
}
