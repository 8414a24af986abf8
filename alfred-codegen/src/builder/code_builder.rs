use super::{CodeFragment, Indent};

/// Accumulates indented source text.
///
/// # Example
///
/// ```
/// use alfred_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("class Foo {")
///     .indent()
///     .line("int x;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class Foo {\n  int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    pub fn line(mut self, s: &str) -> Self {
        self.write_line(s);
        self
    }

    /// An empty line, never indented.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    /// Write fragments at the current level.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        for fragment in fragments {
            self.write_fragment(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.write_line(&s),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.write_line(&header);
                self.write_nested(1, body);
                if let Some(close) = close {
                    self.write_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => self.write_nested(1, fragments),
            CodeFragment::Wrapped(lines) => {
                let mut lines = lines.into_iter();
                if let Some(first) = lines.next() {
                    self.write_line(&first);
                }
                let rest = lines.map(CodeFragment::Line).collect();
                self.write_nested(self.indent.continuation(), rest);
            }
        }
    }

    fn write_nested(&mut self, levels: usize, fragments: Vec<CodeFragment>) {
        self.level += levels;
        for fragment in fragments {
            self.write_fragment(fragment);
        }
        self.level -= levels;
    }

    fn write_line(&mut self, s: &str) {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.unit());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
