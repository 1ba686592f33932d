//! The `quizdrill shell` command: an interactive prompt over the same
//! subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};

use quizdrill_core::error::PromptError;
use quizdrill_core::traits::Prompter;

use crate::app::App;
use crate::commands::{dispatch, QuizCommand};

#[derive(Debug, Parser)]
#[command(name = "quizdrill", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Quiz(QuizCommand),

    /// Leave the shell
    #[command(visible_alias = "q")]
    Quit,
}

fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
    let words = line
        .split_whitespace()
        .enumerate()
        .map(|(i, w)| if i == 0 && w == "h" { "help" } else { w });
    ShellLine::try_parse_from(words).map(|l| l.command)
}

pub async fn execute<P: Prompter>(app: &mut App<P>) -> Result<()> {
    println!("quizdrill shell. Type `help` for commands, `quit` to leave.");

    loop {
        let prompt = app.config.prompt.clone();
        let line = match app.prompter.ask(&prompt).await {
            Ok(line) => line,
            Err(PromptError::Interrupted) => break,
            Err(PromptError::Closed) => {
                eprintln!();
                break;
            }
            Err(e) => return Err(e.into()),
        };
        if line.is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Quiz(command)) => {
                if let Err(e) = dispatch(app, command).await {
                    eprintln!("Error: {e:#}");
                }
            }
            Err(e) => e.print()?,
        }
    }

    Ok(())
}
