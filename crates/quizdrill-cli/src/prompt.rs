//! Terminal prompter.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stderr, Stdin};

use quizdrill_core::error::PromptError;
use quizdrill_core::traits::Prompter;

/// Reads answers line by line from stdin.
///
/// Prompts go to stderr, leaving stdout to command output such as the JSON
/// report of `play --format json`.
///
/// End of input resolves to [`PromptError::Closed`] and Ctrl-C to
/// [`PromptError::Interrupted`], so a pending question never hangs past
/// shutdown.
pub struct StdinPrompter {
    lines: Lines<BufReader<Stdin>>,
    prompts: Stderr,
}

impl StdinPrompter {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            prompts: tokio::io::stderr(),
        }
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.write_all(prompt.as_bytes()).await?;
        if !prompt.ends_with(char::is_whitespace) {
            self.prompts.write_all(b" ").await?;
        }
        self.prompts.flush().await?;

        tokio::select! {
            line = self.lines.next_line() => match line? {
                Some(line) => Ok(line.trim().to_string()),
                None => Err(PromptError::Closed),
            },
            _ = tokio::signal::ctrl_c() => {
                self.prompts.write_all(b"\n").await?;
                Err(PromptError::Interrupted)
            }
        }
    }
}
