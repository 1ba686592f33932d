//! The `quizdrill delete` command.

use anyhow::Result;

use quizdrill_core::model::QuizId;
use quizdrill_core::traits::Prompter;

use crate::app::App;

pub async fn execute<P: Prompter>(app: &mut App<P>, id: QuizId) -> Result<()> {
    app.store.delete(id).await?;
    println!("Deleted quiz {id}");
    Ok(())
}
