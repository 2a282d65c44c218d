use clap::Subcommand;
use sgpahub_core::Grade;

#[derive(Subcommand)]
pub enum GradesAction {
    /// Print the grade-point scale
    Scale {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: GradesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GradesAction::Scale { json } => {
            if json {
                let scale: Vec<serde_json::Value> = Grade::ALL
                    .into_iter()
                    .map(|g| {
                        serde_json::json!({
                            "grade": g.code(),
                            "points": g.points(),
                            "cleared": g.is_cleared(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&scale)?);
            } else {
                for grade in Grade::ALL {
                    println!("{}  {:>2} points", grade, grade.points());
                }
            }
        }
    }
    Ok(())
}
