//! Shared state handed to every command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizdrill_core::traits::{Prompter, QuestionStore};
use quizdrill_store::config::{load_config_from, open_store, QuizdrillConfig};

use crate::prompt::StdinPrompter;

/// The store, the input channel, and the loaded configuration.
pub struct App<P> {
    pub store: Box<dyn QuestionStore>,
    pub prompter: P,
    pub config: QuizdrillConfig,
}

impl App<StdinPrompter> {
    /// Load the config, apply a `--store` override, and open the store.
    pub fn open(config_path: Option<PathBuf>, store_override: Option<PathBuf>) -> Result<Self> {
        let mut config = load_config_from(config_path.as_deref())?;
        if let Some(store) = store_override {
            config.store_path = store;
        }
        tracing::debug!(store = %config.store_path.display(), "opening quiz store");
        let store = open_store(&config.store_path);
        Ok(App::new(store, StdinPrompter::new(), config))
    }
}

impl<P: Prompter> App<P> {
    pub fn new(store: Box<dyn QuestionStore>, prompter: P, config: QuizdrillConfig) -> Self {
        Self {
            store,
            prompter,
            config,
        }
    }

    /// Random source for a play session: `seed`, else the configured seed,
    /// else the OS.
    pub fn session_rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.config.rng_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
