/// Line-oriented questionnaire on an async reader/writer pair.
///
/// Options are picked by number. Multi-select answers take several numbers
/// ("1,3" or "1 3"), applied in order as toggles. `b` goes back, `q` quits,
/// and an empty line keeps the answer already recorded for the question.
use std::fmt::Write as _;

use headache_core::questions::{Question, QuestionKind};
use headache_core::AnswerValue;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::session::{toggle_selection, Progress, Session};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Back,
    Quit,
    Keep,
    Answer(AnswerValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every required question was answered, or a red flag ended it early.
    Finished,
    /// The user quit or input ran out.
    Quit,
}

pub fn parse_command(line: &str, question: &Question) -> Result<Command, AppError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Ok(Command::Keep),
        "b" | "back" => return Ok(Command::Back),
        "q" | "quit" => return Ok(Command::Quit),
        _ => {}
    }

    let value = match question.kind {
        QuestionKind::Single => {
            let index = parse_choice(line, question)?;
            AnswerValue::Single(question.options[index].value.to_string())
        }
        QuestionKind::Multiple => {
            let mut picked: Vec<String> = Vec::new();
            for token in line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
            {
                let index = parse_choice(token, question)?;
                picked = toggle_selection(&picked, question.options[index].value);
            }
            AnswerValue::Multiple(picked)
        }
        QuestionKind::Scale { .. } => {
            let n: f64 = line
                .parse()
                .map_err(|_| AppError::InvalidInput(format!("{line:?} is not a number")))?;
            AnswerValue::Scale(n)
        }
    };
    Ok(Command::Answer(value))
}

/// Zero-based option index from a 1-based number typed by the user.
fn parse_choice(token: &str, question: &Question) -> Result<usize, AppError> {
    let count = question.options.len();
    match token.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(AppError::InvalidInput(format!(
            "{token:?} is not an option number between 1 and {count}"
        ))),
    }
}

pub fn format_question(
    question: &Question,
    position: usize,
    total: usize,
    current: Option<&AnswerValue>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[{}/{}] {}", position + 1, total, question.text);
    if let Some(subtext) = question.subtext {
        let _ = writeln!(out, "    {subtext}");
    }

    for (i, option) in question.options.iter().enumerate() {
        let marker = if current.is_some_and(|v| v.matches(option.value)) {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(out, "  {marker}{:>2}) {}", i + 1, option.label);
    }

    let hint = match question.kind {
        QuestionKind::Single => "choose a number".to_string(),
        QuestionKind::Multiple => "choose one or more numbers, separated by commas".to_string(),
        QuestionKind::Scale { min, max } => format!("enter a number from {min} to {max}"),
    };
    let _ = write!(out, "  ({hint}; b = back, q = quit");
    match current {
        Some(AnswerValue::Scale(n)) => {
            let _ = write!(out, "; Enter keeps {n}");
        }
        Some(_) => out.push_str("; Enter keeps *"),
        None => {}
    }
    out.push_str(")\n> ");
    out
}

/// Drive the session until it is ready for diagnosis or the user leaves.
pub async fn run<R, W>(session: &mut Session, input: R, output: &mut W) -> Result<Outcome, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(question) = session.current_question() {
        let prompt = format_question(
            question,
            session.current_index(),
            session.total_questions(),
            session.current_answer(),
        );
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!(session = %session.id(), "input closed");
            return Ok(Outcome::Quit);
        };

        let value = match parse_command(&line, question) {
            Ok(Command::Back) => {
                session.go_back();
                continue;
            }
            Ok(Command::Quit) => return Ok(Outcome::Quit),
            Ok(Command::Keep) => match session.current_answer() {
                Some(value) => value.clone(),
                None => {
                    output.write_all(b"  Please choose an answer.\n").await?;
                    continue;
                }
            },
            Ok(Command::Answer(value)) => value,
            Err(e) => {
                warn!(question = question.id, error = %e, "rejected input");
                output.write_all(format!("  {e}\n").as_bytes()).await?;
                continue;
            }
        };

        match session.answer(value) {
            Ok(Progress::Continue) => {}
            Ok(Progress::Ready) => return Ok(Outcome::Finished),
            Err(AppError::InvalidInput(msg)) => {
                warn!(question = question.id, error = %msg, "rejected answer");
                output.write_all(format!("  {msg}\n").as_bytes()).await?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Outcome::Finished)
}
