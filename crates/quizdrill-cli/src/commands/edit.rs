//! The `quizdrill edit` command.

use anyhow::Result;

use quizdrill_core::model::{NewQuiz, QuizId};
use quizdrill_core::traits::Prompter;

use crate::app::App;

/// Ask for a new value, keeping `current` when the reply is empty.
async fn ask_or_keep<P: Prompter>(
    prompter: &mut P,
    label: &str,
    current: &str,
) -> Result<String> {
    let reply = prompter.ask(&format!("{label} [{current}]:")).await?;
    Ok(if reply.is_empty() {
        current.to_string()
    } else {
        reply
    })
}

pub async fn execute<P: Prompter>(app: &mut App<P>, id: QuizId) -> Result<()> {
    let quiz = app.store.get(id).await?;

    let question = ask_or_keep(&mut app.prompter, "Question", &quiz.question).await?;
    let answer = ask_or_keep(&mut app.prompter, "Answer", &quiz.answer).await?;

    let updated = app
        .store
        .update(quiz.with_draft(NewQuiz::new(question, answer)))
        .await?;
    println!("Changed quiz {id} to: {updated}");
    Ok(())
}
