//! quizdrill configuration and store factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizdrill_core::traits::QuestionStore;

use crate::catalog::Catalog;
use crate::json_file::JsonFileStore;
use crate::memory::InMemoryStore;

/// `store_path` value selecting a throwaway in-memory store.
pub const MEMORY_STORE: &str = ":memory:";

/// Top-level quizdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdrillConfig {
    /// Location of the JSON quiz store, or `:memory:`.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Fixed seed for the play order (None = seeded from the OS).
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Prompt shown by the interactive shell.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("quizzes.json")
}
fn default_prompt() -> String {
    "quizdrill> ".to_string()
}

impl Default for QuizdrillConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            rng_seed: None,
            prompt: default_prompt(),
        }
    }
}

/// Expand `${VAR}` references in a store path.
///
/// Referencing an unset variable is an error.
fn expand_env_vars(raw: &str) -> Result<String> {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some((head, tail)) = rest.split_once("${") {
        let Some((name, after)) = tail.split_once('}') else {
            break;
        };
        let value = std::env::var(name)
            .with_context(|| format!("store_path references unset variable ${{{name}}}"))?;
        expanded.push_str(head);
        expanded.push_str(&value);
        rest = after;
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `path`, which must exist when given
/// 2. `quizdrill.toml` in the current directory
/// 3. `~/.config/quizdrill/config.toml`
///
/// `QUIZDRILL_STORE` overrides `store_path`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdrill.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizdrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizdrillConfig::default(),
    };

    if let Ok(store) = std::env::var("QUIZDRILL_STORE") {
        config.store_path = PathBuf::from(store);
    }

    config.store_path = PathBuf::from(expand_env_vars(&config.store_path.to_string_lossy())?);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdrill"))
}

/// Create the store selected by `store_path`.
pub fn open_store(store_path: &Path) -> Box<dyn QuestionStore> {
    if store_path == Path::new(MEMORY_STORE) {
        tracing::debug!("using in-memory store");
        Box::new(InMemoryStore::with_catalog(Catalog::starter()))
    } else {
        Box::new(JsonFileStore::new(store_path))
    }
}
