use clap::Subcommand;
use sgpahub_core::advice::build_advice_prompt;
use sgpahub_core::{
    Advice, AdviceRequester, Config, Curriculum, GeminiClient, RequestOutcome, Session,
    FAILURE_FALLBACK,
};

use super::apply_grade_overrides;

#[derive(Subcommand)]
pub enum AdviceAction {
    /// Request encouragement text for the current selection
    Generate {
        /// Grade override, repeatable (e.g. --grade MA101=BB)
        #[arg(long = "grade", value_name = "CODE=GRADE")]
        grades: Vec<String>,
        /// API key (falls back to GEMINI_API_KEY, then the stored config)
        #[arg(long)]
        api_key: Option<String>,
        /// Model override
        #[arg(long)]
        model: Option<String>,
        /// Output the full session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AdviceAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdviceAction::Generate {
            grades,
            api_key,
            model,
            json,
        } => {
            let config = Config::load_or_default();

            // Credential resolution happens here at the edge; the client
            // itself only ever sees an explicit key.
            let api_key = api_key
                .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                .or_else(|| config.advice.api_key.clone())
                .filter(|key| !key.is_empty());

            let mut session = Session::new(Curriculum::first_semester());
            apply_grade_overrides(&mut session, &grades)?;

            let report = session.report();
            let prompt = build_advice_prompt(
                session.controller().curriculum(),
                session.controller().selection(),
                report.sgpa,
            );

            // A missing credential is an external-service failure like any
            // other: the panel always shows something, so it maps to the
            // fixed fallback text rather than an error state.
            let advice = match api_key.map(GeminiClient::new) {
                Some(Ok(client)) => {
                    let client = client
                        .with_model(model.unwrap_or(config.advice.model))
                        .with_endpoint(config.advice.endpoint);
                    let mut requester = AdviceRequester::new(client);
                    let runtime = tokio::runtime::Runtime::new()?;
                    match runtime.block_on(requester.request(&prompt)) {
                        RequestOutcome::Done(advice) => advice,
                        RequestOutcome::Busy => Advice::fallback(FAILURE_FALLBACK),
                    }
                }
                Some(Err(_)) | None => Advice::fallback(FAILURE_FALLBACK),
            };
            session.set_advice(advice);

            if json {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            } else if let Some(advice) = session.advice() {
                println!("\"{}\"", advice.text);
            }
        }
    }
    Ok(())
}
