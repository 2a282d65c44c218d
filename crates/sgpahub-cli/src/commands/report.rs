use clap::Subcommand;
use sgpahub_core::{Curriculum, Grade, Session};

use super::apply_grade_overrides;

#[derive(Subcommand)]
pub enum ReportAction {
    /// Compute the SGPA report for a selection
    Show {
        /// Grade override, repeatable (e.g. --grade MA101=BB)
        #[arg(long = "grade", value_name = "CODE=GRADE")]
        grades: Vec<String>,
        /// Output the full session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ReportAction::Show { grades, json } => {
            let mut session = Session::new(Curriculum::first_semester());
            apply_grade_overrides(&mut session, &grades)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
                return Ok(());
            }

            let report = session.report();
            for subject in session.controller().curriculum().subjects() {
                let grade = session
                    .controller()
                    .grade(&subject.code)
                    .unwrap_or(Grade::NA);
                println!(
                    "{:<6} {:<36} {:>2} cr  {}  ({:>2} pts)",
                    subject.code,
                    subject.name,
                    subject.credits,
                    grade,
                    grade.points()
                );
            }
            println!();
            println!("SGPA: {:.2}", report.sgpa);
            println!(
                "credits cleared: {} / {}",
                report.earned_credits, report.total_credits
            );
        }
    }
    Ok(())
}
