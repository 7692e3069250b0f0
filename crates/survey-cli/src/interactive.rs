//! Line-oriented questionnaire
//!
//! One question per screen. Input per line:
//!
//! | input | action |
//! |---|---|
//! | number | select that answer |
//! | `w` or empty | Weiter |
//! | `z` | Zurück |
//! | `a` | Auswerten (last question only) |
//! | `q` or end of input | quit without saving |

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use survey_flow::{FlowController, SessionError, SurveySession};
use survey_store::KeyValueStore;
use tokio::task::JoinHandle;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Pick an answer value
    Select(i32),
    /// Weiter
    Next,
    /// Zurück
    Back,
    /// Auswerten
    Submit,
    /// Leave without saving
    Quit,
    /// Anything else
    Unknown(String),
}

impl Input {
    /// Interpret a line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" | "w" | "weiter" => Self::Next,
            "z" | "zurück" | "zurueck" => Self::Back,
            "a" | "auswerten" => Self::Submit,
            "q" | "quit" | "beenden" => Self::Quit,
            other => other
                .parse()
                .map_or_else(|_| Self::Unknown(line.to_string()), Self::Select),
        }
    }
}

/// How the questionnaire ended
#[derive(Debug)]
pub enum Outcome {
    /// Answers saved; delivery still running
    Submitted(JoinHandle<()>),
    /// User left before submitting
    Quit,
}

/// Question screen for the current flow position
#[must_use]
pub fn render_question(flow: &FlowController) -> String {
    let question = flow.current_question();
    let mut out = String::new();

    let category = flow.current_scale().map_or("", |s| s.name.as_str());
    let _ = writeln!(
        out,
        "{category} · {} · {} %",
        flow.position_label(),
        flow.progress_rounded()
    );
    let _ = writeln!(out, "{}", question.text);

    if let Some(scale) = flow.current_scale() {
        let _ = writeln!(
            out,
            "  {} = {}   {} = {}",
            scale.min, scale.min_label, scale.max, scale.max_label
        );
        let options: Vec<String> = scale
            .points()
            .map(|p| {
                if flow.current_answer() == Some(p) {
                    format!("[{p}]")
                } else {
                    p.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "  Antwort: {}", options.join(" "));
    }

    let mut keys = vec!["[Zahl] auswählen"];
    if !flow.is_first() {
        keys.push("[z] Zurück");
    }
    keys.push(if flow.is_last() { "[a] Auswerten" } else { "[w] Weiter" });
    keys.push("[q] Beenden");
    let _ = writeln!(out, "  {}", keys.join("  "));
    out
}

/// Run the questionnaire until it is submitted or abandoned
///
/// Flow errors and failed saves are shown and the prompt repeats. Deliveries
/// from submits that could not be saved stay with the session, see
/// [`SurveySession::take_detached`].
///
/// # Errors
/// IO on `input`/`output`, or any other session error.
pub fn run<S, R, W>(session: &mut SurveySession<S>, input: R, output: &mut W) -> anyhow::Result<Outcome>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "\n{}> ", render_question(session.flow_mut()?))?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!("input closed");
            return Ok(Outcome::Quit);
        };

        let flow = session.flow_mut()?;
        let feedback = match Input::parse(&line) {
            Input::Select(value) => flow.answer_current(value).err().map(|e| e.to_string()),
            Input::Next => flow.advance().err().map(|e| e.to_string()),
            Input::Back => {
                flow.retreat();
                None
            }
            Input::Submit => match session.submit() {
                Ok(handle) => return Ok(Outcome::Submitted(handle)),
                Err(SessionError::Flow(e)) => Some(e.to_string()),
                Err(SessionError::Store(e)) => Some(format!("Speichern fehlgeschlagen: {e}")),
                Err(e) => return Err(e.into()),
            },
            Input::Quit => return Ok(Outcome::Quit),
            Input::Unknown(raw) => Some(format!("unbekannte Eingabe: {raw}")),
        };

        if let Some(message) = feedback {
            writeln!(output, "! {message}")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use survey_catalog::Catalog;

    #[test]
    fn parse_inputs() {
        assert_eq!(Input::parse("3\n"), Input::Select(3));
        assert_eq!(Input::parse("-1"), Input::Select(-1));
        assert_eq!(Input::parse(""), Input::Next);
        assert_eq!(Input::parse(" W "), Input::Next);
        assert_eq!(Input::parse("z"), Input::Back);
        assert_eq!(Input::parse("a"), Input::Submit);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("hallo"), Input::Unknown("hallo".into()));
    }

    #[test]
    fn first_question_screen() {
        let flow = FlowController::new(Arc::new(Catalog::builtin()));
        let screen = render_question(&flow);
        assert!(screen.starts_with("Usability · Frage 1 von 9 · 0 %"));
        assert!(screen.contains("Antwort: 1 2 3 4 5"));
        assert!(screen.contains("[w] Weiter"));
        assert!(!screen.contains("Zurück"));
    }

    #[test]
    fn selected_answer_is_marked() {
        let mut flow = FlowController::new(Arc::new(Catalog::builtin()));
        flow.answer_current(2).unwrap();
        flow.advance().unwrap();
        flow.retreat();
        assert!(render_question(&flow).contains("Antwort: 1 [2] 3 4 5"));
    }
}
