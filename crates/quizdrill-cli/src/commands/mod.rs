//! Subcommands shared by the command line and the interactive shell.

use anyhow::Result;
use clap::Subcommand;

use quizdrill_core::model::QuizId;
use quizdrill_core::traits::Prompter;

use crate::app::App;

pub mod add;
pub mod credits;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod play;
pub mod shell;
pub mod show;

/// Operations on the quiz store.
#[derive(Debug, Subcommand)]
pub enum QuizCommand {
    /// List the stored quizzes
    List,

    /// Show the question and answer of a quiz
    Show {
        /// Quiz id
        id: QuizId,
    },

    /// Add a new quiz, prompting for missing fields
    Add {
        /// Question text
        #[arg(long)]
        question: Option<String>,

        /// Answer text
        #[arg(long)]
        answer: Option<String>,
    },

    /// Delete a quiz
    Delete {
        /// Quiz id
        id: QuizId,
    },

    /// Edit a quiz interactively
    Edit {
        /// Quiz id
        id: QuizId,
    },

    /// Answer a single quiz
    Test {
        /// Quiz id
        id: QuizId,
    },

    /// Answer every quiz in random order until the first mistake
    #[command(visible_alias = "p")]
    Play {
        /// Seed for the question order
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the credits
    Credits,
}

/// Run one store command.
pub async fn dispatch<P: Prompter>(app: &mut App<P>, command: QuizCommand) -> Result<()> {
    match command {
        QuizCommand::List => list::execute(app).await,
        QuizCommand::Show { id } => show::execute(app, id).await,
        QuizCommand::Add { question, answer } => add::execute(app, question, answer).await,
        QuizCommand::Delete { id } => delete::execute(app, id).await,
        QuizCommand::Edit { id } => edit::execute(app, id).await,
        QuizCommand::Test { id } => test::execute(app, id).await,
        QuizCommand::Play { seed, format } => {
            let outcome = play::execute(app, seed, &format).await?;
            anyhow::ensure!(!outcome.is_aborted(), "play session did not finish");
            Ok(())
        }
        QuizCommand::Credits => {
            credits::execute();
            Ok(())
        }
    }
}
