//! Advice: optional encouragement text from a generative-text service.
//!
//! The external service is opaque to the rest of the crate: prompt string in,
//! advice string or failure out, behind the [`AdviceGenerator`] seam. Any
//! failure is recovered locally by substituting a fixed fallback string --
//! never surfaced to the caller as an error state, never retried.

mod gemini;
mod prompt;

pub use gemini::{GeminiClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use prompt::build_advice_prompt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdviceError;

/// Shown when the service answered but with empty text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Your academic grid is looking strong! \
    Continue to sustain this voltage through the next semester.";

/// Shown when the call failed outright.
pub const FAILURE_FALLBACK: &str = "Excellent work! You've successfully cleared the \
    first stage. Keep your circuit grounded and your goals high for the next semester.";

/// Where an advice string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceSource {
    /// Text returned by the generative service.
    Generated,
    /// One of the fixed fallback strings.
    Fallback,
}

/// Display string for the advice panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,
    pub source: AdviceSource,
    pub generated_at: DateTime<Utc>,
}

impl Advice {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Generated,
            generated_at: Utc::now(),
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Fallback,
            generated_at: Utc::now(),
        }
    }
}

/// The generative-text boundary: prompt in, text or failure out.
#[allow(async_fn_in_trait)]
pub trait AdviceGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError>;
}

/// Outcome of one trigger of the requester.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// A request was already outstanding; this trigger was ignored.
    Busy,
    /// The request ran to completion (possibly via a fallback).
    Done(Advice),
}

/// Drives the generator and maps every outcome to displayable [`Advice`].
///
/// A busy flag guards re-entrant triggering: a second trigger while one
/// request is outstanding is ignored, matching a disabled trigger control.
/// Because [`request`](Self::request) takes `&mut self`, two awaits can never
/// actually overlap; the flag exists for interactive shells that poll
/// [`is_busy`](Self::is_busy) between triggers to decide whether to offer one.
/// There is no cancellation; an in-flight request runs to completion and its
/// result is simply the last writer.
pub struct AdviceRequester<G: AdviceGenerator> {
    generator: G,
    busy: bool,
    last_error: Option<AdviceError>,
}

impl<G: AdviceGenerator> AdviceRequester<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            busy: false,
            last_error: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The error behind the most recent fallback, for diagnostics only.
    pub fn last_error(&self) -> Option<&AdviceError> {
        self.last_error.as_ref()
    }

    /// Send `prompt` to the generator and map the result to advice.
    pub async fn request(&mut self, prompt: &str) -> RequestOutcome {
        if self.busy {
            return RequestOutcome::Busy;
        }
        self.busy = true;
        let result = self.generator.generate(prompt).await;
        self.busy = false;

        let advice = match result {
            Ok(text) if text.trim().is_empty() => {
                self.last_error = None;
                Advice::fallback(EMPTY_RESPONSE_FALLBACK)
            }
            Ok(text) => {
                self.last_error = None;
                Advice::generated(text)
            }
            Err(err) => {
                self.last_error = Some(err);
                Advice::fallback(FAILURE_FALLBACK)
            }
        };
        RequestOutcome::Done(advice)
    }

    #[cfg(test)]
    fn force_busy(&mut self) {
        self.busy = true;
    }
}
