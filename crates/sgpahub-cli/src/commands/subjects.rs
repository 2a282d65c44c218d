use clap::Subcommand;
use sgpahub_core::Curriculum;

#[derive(Subcommand)]
pub enum SubjectsAction {
    /// List the first-semester curriculum
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SubjectsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SubjectsAction::List { json } => {
            let curriculum = Curriculum::first_semester();
            if json {
                println!("{}", serde_json::to_string_pretty(&curriculum)?);
            } else {
                for subject in curriculum.subjects() {
                    println!(
                        "{:<6} {:<36} {:>2} cr  {}",
                        subject.code, subject.name, subject.credits, subject.kind
                    );
                }
                println!("total credits: {}", curriculum.total_credits());
            }
        }
    }
    Ok(())
}
