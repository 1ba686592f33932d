//! Scripted prompter for testing sessions without a terminal.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use crate::error::PromptError;
use crate::model::QuizItem;
use crate::traits::Prompter;

type Responder = Box<dyn FnMut(&str) -> Result<String, PromptError> + Send>;

/// A prompter that answers from a script and records every prompt it saw.
pub struct ScriptedPrompter {
    responder: Responder,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that answers each prompt with `responder(prompt)`.
    pub fn new<F>(responder: F) -> Self
    where
        F: FnMut(&str) -> Result<String, PromptError> + Send + 'static,
    {
        Self {
            responder: Box::new(responder),
            asked: Vec::new(),
        }
    }

    /// Reply with `replies` in order, then report the input as closed.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue: VecDeque<String> = replies.into_iter().map(Into::into).collect();
        Self::new(move |_| queue.pop_front().ok_or(PromptError::Closed))
    }

    /// Always give the stored answer of the quiz whose question was asked.
    pub fn oracle(items: &[QuizItem]) -> Self {
        let answers: HashMap<String, String> = items
            .iter()
            .map(|q| (q.question.clone(), q.answer.clone()))
            .collect();
        Self::new(move |prompt| {
            answers
                .get(prompt)
                .cloned()
                .ok_or_else(|| PromptError::Io(std::io::Error::other("unknown question")))
        })
    }

    /// Fail every prompt as if the input stream were closed.
    pub fn closed() -> Self {
        Self::new(|_| Err(PromptError::Closed))
    }

    /// Prompts received so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn call_count(&self) -> usize {
        self.asked.len()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.asked.push(prompt.to_string());
        (self.responder)(prompt).map(|reply| reply.trim().to_string())
    }
}
