//! # SGPA Hub Core Library
//!
//! This library provides the core logic for the SGPA Hub grade-point
//! calculator. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any interactive front end being
//! a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Curriculum Registry**: Immutable, ordered list of first-semester
//!   subjects with credit weights and the grade-point table
//! - **SGPA Reducer**: Pure recomputation of the weighted grade-point average
//!   from a total grade selection
//! - **Selection Controller**: Single owner of the mutable grade selection,
//!   replaced wholesale on every edit
//! - **Advice**: Optional encouragement text fetched from a generative-text
//!   service, with fixed fallback strings on any failure
//!
//! ## Key Components
//!
//! - [`Curriculum`]: Subject registry with precomputed total credits
//! - [`SelectionController`]: Grade selection state machine
//! - [`Session`]: Selection plus advice, the unit an interactive shell holds
//! - [`GeminiClient`]: Generative-text client behind the [`AdviceGenerator`] seam

pub mod advice;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod report;
pub mod selection;

pub use advice::{
    Advice, AdviceGenerator, AdviceRequester, AdviceSource, GeminiClient, RequestOutcome,
    EMPTY_RESPONSE_FALLBACK, FAILURE_FALLBACK,
};
pub use config::{AdviceConfig, Config};
pub use curriculum::{Curriculum, Grade, Subject, SubjectKind};
pub use error::{AdviceError, ConfigError, CoreError};
pub use report::SgpaReport;
pub use selection::{GradeSelection, SelectionController, Session, SessionSnapshot};
