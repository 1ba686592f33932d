//! The `quizdrill play` command.

use anyhow::Result;

use quizdrill_core::model::QuizItem;
use quizdrill_core::report::SessionReport;
use quizdrill_core::session::{self, NoopObserver, SessionObserver, SessionOutcome};
use quizdrill_core::traits::Prompter;
use quizdrill_core::Verdict;

use crate::app::App;

/// Prints the verdict after every answer.
struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_question(&self, _quiz: &QuizItem, _remaining: usize) {}

    fn on_answer(&self, _quiz: &QuizItem, verdict: Verdict, _score: usize) {
        match verdict {
            Verdict::Correct => println!("Correct!"),
            Verdict::Incorrect => println!("Incorrect."),
        }
    }
}

pub async fn execute<P: Prompter>(
    app: &mut App<P>,
    seed: Option<u64>,
    format: &str,
) -> Result<SessionOutcome> {
    let json = match format {
        "json" => true,
        "text" => false,
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    };

    let rng = app.session_rng(seed);
    let observer: &dyn SessionObserver = if json { &NoopObserver } else { &ConsoleObserver };
    let outcome = session::play(app.store.as_ref(), &mut app.prompter, rng, observer).await;

    let report = SessionReport::from_outcome(&outcome);
    if json {
        println!("{}", report.to_json()?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }

    Ok(outcome)
}
