//! The `quizdrill list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizdrill_core::traits::Prompter;

use crate::app::App;

pub async fn execute<P: Prompter>(app: &mut App<P>) -> Result<()> {
    let quizzes = app.store.fetch_all().await?;

    if quizzes.is_empty() {
        println!("No quizzes. Add one with `quizdrill add`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Question"]);
    for quiz in &quizzes {
        table.add_row(vec![Cell::new(quiz.id), Cell::new(&quiz.question)]);
    }

    println!("{table}");
    Ok(())
}
