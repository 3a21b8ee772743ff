use std::fmt;

use strata_engine::options::OptionsError;

/// Rejected gradient options source.
///
/// Syntax problems carry only a message. Values that parse but are not
/// valid options (bad color, unknown direction, ...) also keep the
/// underlying [`OptionsError`], reachable through [`ParseError::cause`]
/// and `Error::source`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based line of the token or property that failed.
    pub line: usize,
    /// 1-based column of the token or property that failed.
    pub col: usize,
    cause: Option<OptionsError>,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col, cause: None }
    }

    pub(crate) fn invalid(key: &str, cause: OptionsError, line: usize, col: usize) -> Self {
        Self { message: format!("`{}`: {}", key, cause), line, col, cause: Some(cause) }
    }

    /// The options-level error behind this one, if the syntax was fine.
    #[inline]
    pub fn cause(&self) -> Option<&OptionsError> {
        self.cause.as_ref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gradient options, line {} column {}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
