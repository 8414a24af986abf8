//! Rendering targets for reports.

#[cfg(test)]
use std::fmt::Write as _;

/// Where a report is rendered.
///
/// Reports only say what goes out; the target decides how it looks and
/// which stream carries it.
pub trait Output {
    fn title(&mut self, text: &str);

    /// Heading for a block of items.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn key_value_indented(&mut self, key: &str, value: &str);

    fn numbered_item(&mut self, index: usize, text: &str);

    fn list_item(&mut self, text: &str);

    /// A file that was written.
    fn added_item(&mut self, text: &str);

    /// A file that was left untouched.
    fn unchanged_item(&mut self, text: &str);

    fn error(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// Continuation line under the previous error or warning.
    fn note(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    fn divider(&mut self, label: &str);

    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain terminal output. Errors and warnings go to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("  {}. {}", index, text);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn unchanged_item(&mut self, text: &str) {
        println!("  = {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn note(&mut self, msg: &str) {
        eprintln!("  --> {}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered text in memory, both streams interleaved.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub text: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn title(&mut self, text: &str) {
        let _ = writeln!(self.text, "{}\n{}", text, "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        let _ = writeln!(self.text, "{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        let _ = writeln!(self.text, "{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        let _ = writeln!(self.text, "  {}: {}", key, value);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        let _ = writeln!(self.text, "  {}. {}", index, text);
    }

    fn list_item(&mut self, text: &str) {
        let _ = writeln!(self.text, "  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        let _ = writeln!(self.text, "  + {}", text);
    }

    fn unchanged_item(&mut self, text: &str) {
        let _ = writeln!(self.text, "  = {}", text);
    }

    fn error(&mut self, msg: &str) {
        let _ = writeln!(self.text, "error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        let _ = writeln!(self.text, "warning: {}", msg);
    }

    fn note(&mut self, msg: &str) {
        let _ = writeln!(self.text, "  --> {}", msg);
    }

    fn success(&mut self, msg: &str) {
        let _ = writeln!(self.text, "✓ {}", msg);
    }

    fn divider(&mut self, label: &str) {
        let _ = writeln!(self.text, "── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        let _ = writeln!(self.text, "{}", text);
    }

    fn newline(&mut self) {
        self.text.push('\n');
    }
}
