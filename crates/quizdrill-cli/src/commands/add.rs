//! The `quizdrill add` command.

use anyhow::Result;

use quizdrill_core::model::NewQuiz;
use quizdrill_core::traits::Prompter;

use crate::app::App;

pub async fn execute<P: Prompter>(
    app: &mut App<P>,
    question: Option<String>,
    answer: Option<String>,
) -> Result<()> {
    let question = match question {
        Some(q) => q,
        None => app.prompter.ask("Question:").await?,
    };
    let answer = match answer {
        Some(a) => a,
        None => app.prompter.ask("Answer:").await?,
    };

    let quiz = app.store.create(NewQuiz::new(question, answer)).await?;
    println!("Added {quiz}");
    Ok(())
}
