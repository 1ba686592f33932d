//! quizdrill-store: Question store backends.
//!
//! Implements the `QuestionStore` trait over a JSON file and over memory,
//! and loads the quizdrill configuration that selects between them.

pub mod catalog;
pub mod config;
pub mod json_file;
pub mod memory;

pub use catalog::Catalog;
pub use config::{load_config_from, open_store, QuizdrillConfig, MEMORY_STORE};
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
