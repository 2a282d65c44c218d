use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sgpahub-cli", version, about = "SGPA Hub CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Curriculum registry
    Subjects {
        #[command(subcommand)]
        action: commands::subjects::SubjectsAction,
    },
    /// Grading scale
    Grades {
        #[command(subcommand)]
        action: commands::grades::GradesAction,
    },
    /// SGPA report
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Advice generation
    Advice {
        #[command(subcommand)]
        action: commands::advice::AdviceAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Subjects { action } => commands::subjects::run(action),
        Commands::Grades { action } => commands::grades::run(action),
        Commands::Report { action } => commands::report::run(action),
        Commands::Advice { action } => commands::advice::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
