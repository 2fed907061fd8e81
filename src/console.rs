//! Console capability used by the installer: styled output lines and yes/no questions.
//!
//! [`TerminalConsole`] talks to the user through dialoguer; [`ScriptedConsole`]
//! replays canned answers and records everything written, for automation and tests.

use crate::error::SetupError;
use owo_colors::OwoColorize;
use std::collections::VecDeque;
use std::io::IsTerminal;
use tracing::debug;

/// Message style, mirroring Composer's `<info>`, `<comment>`, `<error>` and `<question>` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Comment,
    Error,
    Question,
}

pub trait Console {
    fn write_line(&mut self, tone: Tone, text: &str);

    /// Ask a yes/no question, followed by explanatory `details` lines.
    /// `default` is the answer on bare enter.
    fn confirm(
        &mut self,
        question: &str,
        details: &[String],
        default: bool,
    ) -> Result<bool, SetupError>;
}

/// Console bound to the process terminal.
pub struct TerminalConsole {
    interactive: bool,
    color: bool,
}

impl TerminalConsole {
    /// Interactive only when requested and stdin is a terminal.
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive: interactive && std::io::stdin().is_terminal(),
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Info => text.green().to_string(),
            Tone::Comment => text.yellow().to_string(),
            Tone::Error => text.white().on_red().to_string(),
            Tone::Question => text.black().on_cyan().to_string(),
        }
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, tone: Tone, text: &str) {
        println!("{}", self.paint(tone, text));
    }

    fn confirm(
        &mut self,
        question: &str,
        details: &[String],
        default: bool,
    ) -> Result<bool, SetupError> {
        println!("  {}", self.paint(Tone::Question, question));
        for line in details {
            println!("{}", self.paint(Tone::Info, line));
        }

        if !self.interactive {
            // Non-interactive runs take the default, as Composer does.
            println!("  Answer: {}", if default { "yes" } else { "no" });
            debug!(question, default, "Answered prompt with default");
            return Ok(default);
        }

        dialoguer::Confirm::new()
            .with_prompt("  Answer")
            .default(default)
            .interact()
            .map_err(|e| SetupError::Prompt(e.to_string()))
    }
}

/// Console that answers from a queue and records output.
///
/// When the queue runs dry the question's default is used.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<bool>,
    pub lines: Vec<(Tone, String)>,
    pub questions: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            lines: Vec::new(),
            questions: Vec::new(),
        }
    }

    /// Lines written with the given tone.
    pub fn lines_with(&self, tone: Tone) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// All output joined by newlines.
    pub fn transcript(&self) -> String {
        self.lines
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, tone: Tone, text: &str) {
        self.lines.push((tone, text.to_string()));
    }

    fn confirm(
        &mut self,
        question: &str,
        details: &[String],
        default: bool,
    ) -> Result<bool, SetupError> {
        self.questions.push(question.to_string());
        self.lines.push((Tone::Question, question.to_string()));
        self.lines
            .extend(details.iter().map(|line| (Tone::Info, line.clone())));
        Ok(self.answers.pop_front().unwrap_or(default))
    }
}
