//! Line-oriented user interaction.

use std::collections::VecDeque;
use std::io::{self, BufRead, ErrorKind, Write};

pub trait Console {
    /// Show `prompt` and read one line. Returns None on end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    fn print(&mut self, text: &str);

    /// Read a line, trimmed. End of input reads as an empty answer.
    fn prompt(&mut self, prompt: &str) -> String {
        self.read_line(prompt)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }
}

/// The process terminal.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        read_answer(&mut io::stdin().lock())
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// One line without its terminator. A line that is not valid UTF-8 reads
/// as blank; None only at end of input or on a read failure.
fn read_answer(input: &mut impl BufRead) -> Option<String> {
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(e) if e.kind() == ErrorKind::InvalidData => Some(String::new()),
        Err(_) => None,
    }
}

/// Replays canned answers and records everything shown, prompts included.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front()
    }

    fn print(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}

/// Ask until the answer is yes/y or no/n. End of input counts as no.
pub fn ask_yes_no(console: &mut dyn Console, prompt: &str) -> bool {
    let mut answer = console.read_line(prompt);
    loop {
        match answer.as_deref().map(|s| s.trim().to_lowercase()).as_deref() {
            Some("yes") | Some("y") => return true,
            Some("no") | Some("n") | None => return false,
            Some(_) => answer = console.read_line("Please type 'yes' or 'no': "),
        }
    }
}
