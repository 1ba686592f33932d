//! The `quizdrill show` command.

use anyhow::Result;

use quizdrill_core::model::QuizId;
use quizdrill_core::traits::Prompter;

use crate::app::App;

pub async fn execute<P: Prompter>(app: &mut App<P>, id: QuizId) -> Result<()> {
    let quiz = app.store.get(id).await?;
    println!("{quiz}");
    Ok(())
}
