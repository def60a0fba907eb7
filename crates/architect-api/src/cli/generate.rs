//! One-shot generation with a spinner showing the rotating loading message.

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use architect_core::presentation::BuildView;
use architect_core::session::{CopyOutcome, LOADING_MESSAGES, PRESETS, SubmitOutcome};
use architect_infra::clipboard::system_clipboard;
use architect_types::error::GENERATION_FAILURE_MESSAGE;

use super::render;
use crate::state::AppState;

/// How often the spinner picks up the session's current loading message.
const MESSAGE_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// `architect generate`.
pub async fn generate(
    state: &AppState,
    prompt: Option<String>,
    preset: Option<usize>,
    copy: bool,
    json: bool,
) -> Result<()> {
    if let Some(number) = preset {
        select_preset(state, number)?;
    }
    if let Some(prompt) = prompt {
        state.session.set_prompt(prompt);
    }

    match submit_with_spinner(state, json).await {
        SubmitOutcome::Succeeded(build) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&BuildView::from_build(&build))?);
            } else {
                render::print_dashboard(&build);
            }
        }
        SubmitOutcome::Rejected => bail!("prompt is empty: pass a prompt or --preset N"),
        SubmitOutcome::Ignored => bail!("a generation is already in progress"),
        SubmitOutcome::Failed(_) => {
            if json {
                println!("{}", serde_json::json!({ "error": GENERATION_FAILURE_MESSAGE }));
            }
            return Err(anyhow!(GENERATION_FAILURE_MESSAGE));
        }
    }

    if copy {
        copy_export(state, json);
    }
    Ok(())
}

/// Fill the prompt input from a 1-based preset number.
pub fn select_preset(state: &AppState, number: usize) -> Result<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| state.session.select_preset(index))
        .ok_or_else(|| anyhow!("preset {number} does not exist (choose 1-{})", PRESETS.len()))
}

/// Submit the session's prompt input, showing a spinner until it completes.
///
/// The spinner is hidden in JSON mode or when stderr is not a terminal.
pub async fn submit_with_spinner(state: &AppState, json: bool) -> SubmitOutcome {
    let spinner = if json || !std::io::stderr().is_terminal() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(LOADING_MESSAGES[0]);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let attempt = state.session.submit_input(state.generator.as_ref());
    tokio::pin!(attempt);
    let mut poll = tokio::time::interval(MESSAGE_POLL_INTERVAL);

    let outcome = loop {
        tokio::select! {
            outcome = &mut attempt => break outcome,
            _ = poll.tick() => {
                if let Some(message) = state.session.snapshot().loading_message {
                    spinner.set_message(message);
                }
            }
        }
    };

    spinner.finish_and_clear();
    if let SubmitOutcome::Failed(_) = &outcome {
        if !json {
            eprintln!("  {} {}", style("✗").red().bold(), style(GENERATION_FAILURE_MESSAGE).red());
        }
    }
    outcome
}

/// Copy the current build's export text to the system clipboard, falling
/// back to OSC 52 on the terminal.
///
/// Clipboard failures are silent.
pub fn copy_export(state: &AppState, json: bool) {
    // Keep stdout clean for JSON consumers.
    let outcome = if json {
        state.session.copy_export(&system_clipboard(std::io::stderr()))
    } else {
        state.session.copy_export(&system_clipboard(std::io::stdout()))
    };

    match outcome {
        CopyOutcome::Copied(_) if !json => {
            println!("  {} Export copied to clipboard", style("✓").green().bold());
        }
        CopyOutcome::NoBuild if !json => {
            println!("  {}", style("No build to copy yet.").dim());
        }
        _ => {}
    }
}
