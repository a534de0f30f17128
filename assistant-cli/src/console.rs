//! Interactive session loop.
//!
//! One question → one answer, stateless across turns. The loop has two
//! states: idle (awaiting a line) and answering (one blocking pipeline
//! call in flight); per-question failures are reported and the loop
//! returns to idle.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use crate::assistant::ResumeAssistant;

/// Classification of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line — re-prompt without touching the pipeline.
    Blank,
    /// `exit`/`quit` sentinel (case-insensitive) — terminate the loop.
    Quit,
    /// A question to answer.
    Question(String),
}

/// Classify a raw input line.
///
/// Blank input and sentinels never reach the retriever or the generator.
pub fn classify_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    Input::Question(trimmed.to_string())
}

/// Run the interactive loop until a sentinel, end-of-input, or interrupt.
pub async fn run_console(assistant: &ResumeAssistant) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("You: ") {
            Ok(line) => match classify_input(&line) {
                Input::Blank => continue,
                Input::Quit => {
                    println!("Goodbye.");
                    break;
                }
                Input::Question(question) => {
                    let _ = editor.add_history_entry(&line);
                    match assistant.answer(&question).await {
                        Ok(answer) => println!("\nAssistant: {answer}\n"),
                        Err(e) => {
                            // Per-question failures do not terminate the
                            // loop; the next question may still succeed.
                            warn!(error = %e, "question failed");
                            eprintln!("Error: {e}\n");
                        }
                    }
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\nGoodbye.");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
