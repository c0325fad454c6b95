//! Interactive questions and numbered menus.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
pub(crate) mod testing;


/// Menu entry picked when the answer is empty (the first one).
pub const DEFAULT_CHOICE: usize = 0;

/// Where questions are written and answers read from.
pub trait Console {
    /// Print one line of output, e.g. a menu entry.
    fn show(&mut self, line: &str);

    /// Ask `question` and read one answer line, without the line ending.
    /// `None` means no answer could be read (EOF, Ctrl-C, failed read).
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// Set by the Ctrl-C handler, consumed by the next answer read.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Catch Ctrl-C so an interrupted prompt counts as "no answer" instead of
/// killing the process. The pending read is restarted, so the answer only
/// comes back once Enter is pressed; whatever was typed is discarded.
pub fn catch_interrupts() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
}

/// Prompts on stderr, reads answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn show(&mut self, line: &str) {
        eprintln!("{line}");
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        eprint!("> {question}: ");
        io::stderr().flush().ok();

        INTERRUPTED.store(false, Ordering::SeqCst);
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line);
        take_answer(read, &line, &INTERRUPTED)
    }
}

fn take_answer(read: io::Result<usize>, line: &str, interrupted: &AtomicBool) -> Option<String> {
    if interrupted.swap(false, Ordering::SeqCst) {
        log::debug!("prompt interrupted");
        return None;
    }
    match read {
        Ok(0) => {
            log::debug!("stdin closed while prompting");
            None
        }
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            log::debug!("could not read answer: {e}");
            None
        }
    }
}

/// What a menu answer selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// Position of the chosen entry.
    Index(usize),
    /// Free text typed instead of a number: a path or a command.
    Typed(String),
}

/// Turn a raw menu answer into a choice among `len` entries.
///
/// - no answer or an empty one selects `default`;
/// - a number `n` selects entry `n - 1`; zero and negative numbers count
///   from the end, so `0` is the last entry and `-1` the one before it;
/// - numbers past the end clamp to the last entry, numbers before `-len`
///   clamp to the first;
/// - anything else is returned as typed text.
///
/// With `len == 0` every non-empty answer is typed text.
pub fn resolve_menu_choice(raw: Option<&str>, len: usize, default: usize) -> MenuChoice {
    let answer = raw.map_or("", str::trim);
    if answer.is_empty() {
        return if len == 0 {
            MenuChoice::Typed(String::new())
        } else {
            MenuChoice::Index(default.min(len - 1))
        };
    }
    if len == 0 {
        return MenuChoice::Typed(answer.to_string());
    }
    match parse_number(answer) {
        Some(n) => MenuChoice::Index(clamp_index(n.saturating_sub(1), len)),
        None => MenuChoice::Typed(answer.to_string()),
    }
}

/// Integer answer. Runs of digits too long for `i64` saturate instead of
/// being mistaken for typed text.
fn parse_number(answer: &str) -> Option<i64> {
    if let Ok(n) = answer.parse::<i64>() {
        return Some(n);
    }
    let (negative, digits) = match answer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, answer.strip_prefix('+').unwrap_or(answer)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn clamp_index(index: i64, len: usize) -> usize {
    let last = len - 1;
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    if index >= len_i {
        last
    } else if index >= 0 {
        usize::try_from(index).unwrap_or(last)
    } else if index >= -len_i {
        usize::try_from(len_i + index).unwrap_or(0)
    } else {
        0
    }
}

/// `name`, or `name (value)` when the two differ.
pub fn option_label(name: &str, value: &str) -> String {
    if name == value {
        name.to_string()
    } else {
        format!("{name} ({value})")
    }
}

/// Print a numbered menu of `labels` and read a choice. The first entry is
/// the default.
pub fn choose<C: Console + ?Sized>(console: &mut C, question: &str, labels: &[String]) -> MenuChoice {
    for (i, label) in labels.iter().enumerate() {
        console.show(&format!("   {}) {label}", i + 1));
    }
    let question = format!("{question} (default={})", DEFAULT_CHOICE + 1);
    let answer = console.ask(&question);
    let choice = resolve_menu_choice(answer.as_deref(), labels.len(), DEFAULT_CHOICE);
    log::debug!("menu answer {answer:?} -> {choice:?}");
    choice
}

/// Ask for free text. An empty answer falls back to `default`, or to the
/// empty string when there is none.
pub fn ask_text<C: Console + ?Sized>(console: &mut C, question: &str, default: Option<&str>) -> String {
    let answer = match default {
        Some(d) => console.ask(&format!("{question} (default={d})")),
        None => console.ask(question),
    };
    match answer.as_deref().map(str::trim) {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => default.unwrap_or_default().to_string(),
    }
}
