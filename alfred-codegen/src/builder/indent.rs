/// Indentation rules for one output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    unit: &'static str,
    continuation: usize,
}

impl Indent {
    /// Two spaces, wrapped lines two levels deeper (JavaPoet layout).
    pub const JAVA: Self = Self::new("  ", 2);

    pub const fn new(unit: &'static str, continuation: usize) -> Self {
        Self { unit, continuation }
    }

    /// Text for one level.
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Extra levels applied to the second and later lines of a wrapped statement.
    pub fn continuation(&self) -> usize {
        self.continuation
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_layout() {
        assert_eq!(Indent::default(), Indent::JAVA);
        assert_eq!(Indent::JAVA.unit(), "  ");
        assert_eq!(Indent::JAVA.continuation(), 2);
    }
}
