//! Assist mode
//!
//! Suggests guesses for a game played elsewhere. The user reports the feedback
//! the game showed, and the session narrows the candidates.

use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::{ProgressSink, Session};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How many candidates are listed when few remain
const SHOW_CANDIDATES: usize = 10;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistInput {
    Quit,
    New,
    Undo,
    /// The suggested guess was the answer
    Win,
    /// Feedback for the suggested guess, or for `guess` if the user played another word
    Feedback {
        guess: Option<Word>,
        feedback: Feedback,
    },
}

impl AssistInput {
    /// Parse a command, a feedback string, or `<word> <feedback>`
    ///
    /// # Errors
    /// Returns `SolverError::Word` or `SolverError::Feedback` for malformed input.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::commands::AssistInput;
    ///
    /// assert_eq!(AssistInput::parse("undo").unwrap(), AssistInput::Undo);
    /// assert!(matches!(
    ///     AssistInput::parse("crane YGG-G").unwrap(),
    ///     AssistInput::Feedback { guess: Some(_), .. }
    /// ));
    /// ```
    pub fn parse(line: &str) -> Result<Self, SolverError> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            "new" | "n" => return Ok(Self::New),
            "undo" | "u" => return Ok(Self::Undo),
            "win" | "correct" | "solved" => return Ok(Self::Win),
            _ => {}
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(guess), Some(feedback), None) => Ok(Self::Feedback {
                guess: Some(Word::new(guess)?),
                feedback: Feedback::parse(feedback)?,
            }),
            _ => Ok(Self::Feedback {
                guess: None,
                feedback: Feedback::parse(line)?,
            }),
        }
    }
}

/// Run the assist loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_assist<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    mut input: R,
    out: &mut W,
    progress: &dyn ProgressSink,
) -> io::Result<()> {
    writeln!(out, "Enter the feedback the game shows for each guess:")?;
    writeln!(out, "  G/g/🟩 exact, Y/y/🟨 present, -/_/⬜ absent")?;
    writeln!(out, "  '<word> <feedback>' if you played a different word")?;
    writeln!(out, "Commands: 'win', 'undo', 'new', 'quit'\n")?;

    loop {
        let turn = session.history().len() + 1;
        let remaining = session.candidates().len();
        let suggestion = session.suggest(progress);

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(out, "Turn {turn}: {remaining} candidates remaining")?;
        if let Some(evaluation) = &suggestion {
            writeln!(
                out,
                "Suggested guess: {} (leaves {:.2} on average)",
                evaluation.best.word.text().to_uppercase().bright_yellow().bold(),
                evaluation.best.average_remaining
            )?;
        }
        if remaining <= SHOW_CANDIDATES {
            let list: Vec<String> = session
                .candidates()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            writeln!(out, "Candidates: {}", list.join(", "))?;
        }

        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = match AssistInput::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{} {e}", "Invalid input:".red())?;
                continue;
            }
        };

        let suggested = suggestion.map(|evaluation| evaluation.best.word.clone());
        match command {
            AssistInput::Quit => return Ok(()),
            AssistInput::New => {
                session.reset();
                writeln!(out, "New game started")?;
            }
            AssistInput::Undo => match session.undo() {
                Some((guess, feedback)) => writeln!(out, "Undid {guess} {feedback}")?,
                None => writeln!(out, "Nothing to undo")?,
            },
            AssistInput::Win => solved(session, suggested.as_ref(), out)?,
            AssistInput::Feedback { guess, feedback } => {
                let Some(guess) = guess.or(suggested) else {
                    writeln!(out, "{}", "No suggestion; enter '<word> <feedback>'".red())?;
                    continue;
                };
                if feedback.is_perfect() {
                    solved(session, Some(&guess), out)?;
                    continue;
                }
                if let Err(e) = session.apply(guess, feedback) {
                    writeln!(out, "{} {e}", "Rejected:".red())?;
                    writeln!(out, "Check the feedback, or 'undo' an earlier guess")?;
                }
            }
        }
    }
}

fn solved<W: Write>(
    session: &mut Session<'_>,
    answer: Option<&Word>,
    out: &mut W,
) -> io::Result<()> {
    let turn = session.history().len() + 1;
    writeln!(
        out,
        "{}",
        format!(
            "Solved in {turn} {}!",
            if turn == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    )?;
    for (i, (guess, feedback)) in session.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            guess.text().to_uppercase(),
            feedback.to_emoji()
        )?;
    }
    if let Some(answer) = answer {
        writeln!(
            out,
            "  {turn}. {} {}",
            answer.text().to_uppercase(),
            Feedback::PERFECT.to_emoji()
        )?;
    }
    session.reset();
    writeln!(out, "New game started")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mark, Vocabulary};
    use crate::solver::{Silent, SolverConfig};
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(&["crane", "slate", "trace", "grape", "plate"]).unwrap()
    }

    fn run(session: &mut Session<'_>, script: &str) -> String {
        let mut out = Vec::new();
        run_assist(session, Cursor::new(script), &mut out, &Silent).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_feedback() {
        assert_eq!(AssistInput::parse(" Q ").unwrap(), AssistInput::Quit);
        assert_eq!(AssistInput::parse("new").unwrap(), AssistInput::New);
        assert_eq!(AssistInput::parse("win").unwrap(), AssistInput::Win);

        match AssistInput::parse("yGG-g").unwrap() {
            AssistInput::Feedback { guess, feedback } => {
                assert!(guess.is_none());
                assert_eq!(feedback.mark(0), Mark::Present);
            }
            other => panic!("unexpected input: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            AssistInput::parse("GGG"),
            Err(SolverError::Feedback(_))
        ));
        assert!(matches!(
            AssistInput::parse("cr4ne GGGGG"),
            Err(SolverError::Word(_))
        ));
    }

    #[test]
    fn explicit_guess_is_folded() {
        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());

        run(&mut session, "crane YGG-G\n");

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.candidates().len(), 1);
        assert_eq!(session.candidates()[0].text(), "trace");
    }

    #[test]
    fn scoring_progress_is_finished_every_turn() {
        use std::sync::Mutex;

        #[derive(Default)]
        struct Events(Mutex<Vec<&'static str>>);
        impl ProgressSink for Events {
            fn start(&self, _total: usize) {
                self.0.lock().unwrap().push("start");
            }
            fn scored(&self, _done: usize, _total: usize) {}
            fn finish(&self) {
                self.0.lock().unwrap().push("finish");
            }
        }

        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());
        let events = Events::default();
        let mut out = Vec::new();

        run_assist(
            &mut session,
            Cursor::new("crane YGG-G\nquit\n"),
            &mut out,
            &events,
        )
        .unwrap();

        let events = events.0.into_inner().unwrap();
        assert_eq!(events, ["start", "finish", "start", "finish"]);
    }

    #[test]
    fn scoring_bar_is_cleared_before_prompt() {
        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());
        let bar = indicatif::ProgressBar::hidden();
        let mut out = Vec::new();

        run_assist(&mut session, Cursor::new("quit\n"), &mut out, &bar).unwrap();

        assert!(bar.is_finished());
    }

    #[test]
    fn undo_and_quit() {
        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());

        let output = run(&mut session, "crane YGG-G\nundo\nundo\nquit\ncrane YGG-G\n");

        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), 5);
        assert!(output.contains("Nothing to undo"));
    }

    #[test]
    fn contradictory_feedback_keeps_session() {
        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());

        let output = run(&mut session, "crane -----\n");

        assert!(output.contains("no candidates remain"));
        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), 5);
    }

    #[test]
    fn perfect_feedback_starts_new_game() {
        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());

        let output = run(&mut session, "crane YGG-G\nGGGGG\n");

        assert!(output.contains("New game started"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn bare_feedback_applies_to_suggestion() {
        let vocabulary = Vocabulary::from_strs(&["crane", "slate"]).unwrap();
        let mut session = Session::new(&vocabulary, SolverConfig::default());

        // Both words tie, so CRANE is suggested
        let output = run(&mut session, "--G-G\n");

        assert!(output.contains("CRANE"));
        assert_eq!(session.history()[0].0.text(), "crane");
        assert_eq!(session.candidates().len(), 1);
        assert_eq!(session.candidates()[0].text(), "slate");
    }

    #[test]
    fn win_lists_guesses() {
        let vocabulary = vocabulary();
        let mut session = Session::new(&vocabulary, SolverConfig::default());

        let output = run(&mut session, "crane YGG-G\nwin\n");

        assert!(output.contains("1. CRANE"));
        assert!(output.contains("2. TRACE"));
        assert!(session.history().is_empty());
    }
}
