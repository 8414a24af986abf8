/// A piece of generated code, independent of the current indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header`, the body one level in, then `close` if any.
    ///
    /// Leaving `close` out lets a following block continue the same
    /// construct, as in `} catch (...) {`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Indent(Vec<CodeFragment>),
    /// One statement spread over several lines. Every line after the first
    /// gets the continuation indent.
    Wrapped(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<&str>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.map(str::to_string),
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Split multi-line text into a wrapped statement.
    pub fn wrapped(text: &str) -> Self {
        Self::Wrapped(text.lines().map(str::to_string).collect())
    }
}
