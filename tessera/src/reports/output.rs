//! Output targets for reports.

use std::fmt;

/// One line of report output.
#[derive(Debug, Clone, Copy)]
pub enum Line<'a> {
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    /// A list entry with its marker (`-` neutral, `+` added, `!` missing).
    Item(char, &'a str),
    Warning(&'a str),
    Divider(&'a str),
    Text(&'a str),
    Blank,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Section(name) => write!(f, "{}:", name),
            Line::KeyValue(key, value) => write!(f, "{}: {}", key, value),
            Line::Item(marker, text) => write!(f, "  {} {}", marker, text),
            Line::Warning(msg) => write!(f, "warning: {}", msg),
            Line::Divider(label) => write!(f, "── {} ──", label),
            Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

/// Target output for reports.
///
/// Reports describe *what* to output through the helper methods; targets
/// only decide where each [`Line`] goes.
pub trait Output {
    fn line(&mut self, line: Line<'_>);

    fn section(&mut self, name: &str) {
        self.line(Line::Section(name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(Line::KeyValue(key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(Line::Item('-', text));
    }

    fn added_item(&mut self, text: &str) {
        self.line(Line::Item('+', text));
    }

    fn missing_item(&mut self, text: &str) {
        self.line(Line::Item('!', text));
    }

    fn warning(&mut self, msg: &str) {
        self.line(Line::Warning(msg));
    }

    fn divider(&mut self, label: &str) {
        self.line(Line::Divider(label));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(Line::Text(text));
    }

    fn newline(&mut self) {
        self.line(Line::Blank);
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal. Warnings go to stderr, everything else to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, line: Line<'_>) {
        match line {
            Line::Warning(_) => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Collects rendered lines, for asserting on report layout.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn line(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}
