//! SourceLanguage - the highlighting tag carried by each snippet

use std::fmt;

/// The closed set of source languages a snippet can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    /// A full HTML document, possibly with embedded script
    Markup,
    /// A bare JavaScript fragment
    Script,
}

impl SourceLanguage {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Script => "script",
        }
    }

    /// CodeMirror mode name used for syntax highlighting
    pub fn editor_mode(&self) -> &'static str {
        match self {
            Self::Markup => "htmlmixed",
            Self::Script => "javascript",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_modes() {
        assert_eq!(SourceLanguage::Markup.editor_mode(), "htmlmixed");
        assert_eq!(SourceLanguage::Script.editor_mode(), "javascript");
    }
}
