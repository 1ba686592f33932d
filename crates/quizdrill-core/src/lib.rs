//! quizdrill-core: Play-session engine, traits, and reports.
//!
//! This crate defines the quiz data model, the store and prompter traits,
//! and the randomized session loop that the rest of quizdrill builds on.

pub mod answer;
pub mod error;
pub mod mock;
pub mod model;
pub mod report;
pub mod session;
pub mod traits;

pub use answer::{answers_match, Verdict};
pub use error::{PromptError, StoreError};
pub use model::{NewQuiz, QuizId, QuizItem};
pub use report::{ReportKind, SessionReport};
pub use session::{
    ask_one, play, NoopObserver, PlaySession, SessionObserver, SessionOutcome, SessionState,
};
pub use traits::{Prompter, QuestionStore};
