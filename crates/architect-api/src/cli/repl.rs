//! Interactive session: prompt, generate, browse history, copy exports.

use anyhow::Result;
use console::style;
use dialoguer::Input;

use architect_core::presentation::{BuildView, HISTORY_CAPACITY};
use architect_core::session::{PRESETS, SubmitOutcome};

use super::{generate, render};
use crate::state::AppState;

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free text: becomes the prompt and is submitted.
    Submit(String),
    /// `/preset N`, 1-based.
    Preset(usize),
    /// `/go` submits the current prompt input.
    Go,
    Copy,
    History,
    /// `/show [N]` shows the current build, or the Nth most recent one.
    Show(Option<usize>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return ReplCommand::Submit(line.to_string());
        };

        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or("");
        let arg = words.next().map(str::parse::<usize>);
        match (name, arg) {
            ("preset" | "p", Some(Ok(n))) => ReplCommand::Preset(n),
            ("go" | "g", None) => ReplCommand::Go,
            ("copy" | "c", None) => ReplCommand::Copy,
            ("history" | "h", None) => ReplCommand::History,
            ("show" | "s", None) => ReplCommand::Show(None),
            ("show" | "s", Some(Ok(n))) => ReplCommand::Show(Some(n)),
            ("help" | "?", None) => ReplCommand::Help,
            ("quit" | "exit" | "q", None) => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

pub async fn run_repl(state: &AppState) -> Result<()> {
    println!();
    println!("  {}", style("Woken Architect").bold().cyan());
    println!(
        "  {}",
        style("Describe a build, or type /help for commands.").dim()
    );
    print_presets();

    loop {
        let line = Input::<String>::new()
            .with_prompt(style("architect").cyan().to_string())
            .allow_empty(true)
            .with_initial_text(state.session.prompt())
            .interact_text()?;

        match ReplCommand::parse(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Submit(prompt) => {
                state.session.set_prompt(prompt);
                submit(state).await;
            }
            ReplCommand::Go => submit(state).await,
            ReplCommand::Preset(number) => match generate::select_preset(state, number) {
                Ok(prompt) => println!("  {} {}", style("Prompt set:").dim(), prompt),
                Err(e) => eprintln!("  {} {e}", style("✗").red().bold()),
            },
            ReplCommand::Copy => generate::copy_export(state, false),
            ReplCommand::History => print_history(state),
            ReplCommand::Show(None) => match state.session.current() {
                Some(build) => render::print_dashboard(&build),
                None => println!("  {}", style("No build yet.").dim()),
            },
            ReplCommand::Show(Some(number)) => {
                let history = state.session.history();
                match number.checked_sub(1).and_then(|i| history.get(i)) {
                    Some(build) => render::print_dashboard(build),
                    None => eprintln!(
                        "  {} history holds {} build(s)",
                        style("✗").red().bold(),
                        history.len()
                    ),
                }
            }
            ReplCommand::Help => print_help(),
            ReplCommand::Quit => break,
            ReplCommand::Unknown(input) => eprintln!(
                "  {} unknown command '{input}' (try /help)",
                style("✗").red().bold()
            ),
        }
    }

    Ok(())
}

async fn submit(state: &AppState) {
    match generate::submit_with_spinner(state, false).await {
        SubmitOutcome::Succeeded(build) => render::print_dashboard(&build),
        SubmitOutcome::Rejected => {
            println!("  {}", style("Enter a prompt first, or pick a preset.").dim());
        }
        SubmitOutcome::Ignored => {
            println!("  {}", style("Still generating.").dim());
        }
        // The spinner already reported the failure.
        SubmitOutcome::Failed(_) => {}
    }
}

fn print_presets() {
    println!();
    for (i, prompt) in PRESETS.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", i + 1)).dim(), prompt);
    }
    println!();
}

fn print_history(state: &AppState) {
    let history = state.session.history();
    if history.is_empty() {
        println!("  {}", style("No builds yet.").dim());
        return;
    }
    println!();
    for (i, build) in history.iter().enumerate() {
        let view = BuildView::from_build(build);
        let marker = if i == 0 { "*" } else { " " };
        println!(
            "  {marker} {} {} {}",
            style(format!("{}.", i + 1)).dim(),
            style(&view.badge_label).bold(),
            view.title
        );
    }
    println!(
        "  {}",
        style(format!("Showing up to {HISTORY_CAPACITY} recent builds.")).dim()
    );
    println!();
}

fn print_help() {
    println!();
    for (command, text) in [
        ("<text>", "generate a build from the text"),
        ("/preset N", "fill the prompt with preset N"),
        ("/go", "generate from the current prompt"),
        ("/show [N]", "show the current build, or history entry N"),
        ("/history", "list recent builds"),
        ("/copy", "copy the current export text"),
        ("/quit", "leave"),
    ] {
        println!("  {:<12} {}", style(command).cyan(), text);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_is_submitted_trimmed() {
        assert_eq!(
            ReplCommand::parse("  a tank build  "),
            ReplCommand::Submit("a tank build".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
    }

    #[test]
    fn test_preset_requires_number() {
        assert_eq!(ReplCommand::parse("/preset 3"), ReplCommand::Preset(3));
        assert_eq!(ReplCommand::parse("/p 1"), ReplCommand::Preset(1));
        assert!(matches!(
            ReplCommand::parse("/preset"),
            ReplCommand::Unknown(_)
        ));
        assert!(matches!(
            ReplCommand::parse("/preset x"),
            ReplCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_show_with_and_without_index() {
        assert_eq!(ReplCommand::parse("/show"), ReplCommand::Show(None));
        assert_eq!(ReplCommand::parse("/show 2"), ReplCommand::Show(Some(2)));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(ReplCommand::parse("/go"), ReplCommand::Go);
        assert_eq!(ReplCommand::parse("/copy"), ReplCommand::Copy);
        assert_eq!(ReplCommand::parse("/history"), ReplCommand::History);
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/dance"),
            ReplCommand::Unknown("/dance".to_string())
        );
        assert!(matches!(ReplCommand::parse("/go now"), ReplCommand::Unknown(_)));
    }
}
