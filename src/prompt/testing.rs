use std::collections::VecDeque;

use super::Console;

/// Replays canned answers and records everything written.
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    answers: VecDeque<Option<String>>,
    pub(crate) transcript: Vec<String>,
}

impl ScriptedConsole {
    /// `None` entries behave like an interrupted prompt.
    pub(crate) fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            transcript: Vec::new(),
        }
    }

    /// Same as [`new`](Self::new) for plain answers.
    pub(crate) fn answering(answers: &[&str]) -> Self {
        Self::new(answers.iter().map(|a| Some(*a)))
    }

    pub(crate) fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub(crate) fn questions(&self) -> usize {
        self.transcript.iter().filter(|l| l.starts_with("> ")).count()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        self.transcript.push(format!("> {question}: "));
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected question: {question}"))
    }
}
