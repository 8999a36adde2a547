use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedLexeme { .. } => "UnrecognizedLexeme",
            ErrorImpl::MalformedRealConstant { .. } => "MalformedRealConstant",
            ErrorImpl::InvalidStringConstant { .. } => "InvalidStringConstant",
            ErrorImpl::InvalidCharacterConstant { .. } => "InvalidCharacterConstant",
            ErrorImpl::NewlineInCharacterConstant => "NewlineInCharacterConstant",
            ErrorImpl::IncompleteLogicalOperator { .. } => "IncompleteLogicalOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognizedLexeme { .. } => ErrorTip::None,
            ErrorImpl::MalformedRealConstant { .. } => ErrorTip::Suggestion(String::from(
                "Real constants may contain a single decimal point",
            )),
            ErrorImpl::InvalidStringConstant { .. } => ErrorTip::Suggestion(String::from(
                "String constants must close with `\"` before the end of the line",
            )),
            ErrorImpl::InvalidCharacterConstant { .. } => ErrorTip::Suggestion(String::from(
                "Character constants hold exactly one character",
            )),
            ErrorImpl::NewlineInCharacterConstant => ErrorTip::Suggestion(String::from(
                "Character constants must close with `'` before the end of the line",
            )),
            ErrorImpl::IncompleteLogicalOperator { lexeme } => {
                ErrorTip::Suggestion(format!("Did you mean `{}{}`?", lexeme, lexeme))
            }
        }
    }

    /// The diagnostic text carried by error tokens in place of a lexeme.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

// The `Display` strings below are the messages printed inside
// `Error Message {...}`, so for the first two variants the message is the
// offending text itself, matching the printed form consumers expect.
#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("{lexeme}")]
    UnrecognizedLexeme { lexeme: String },
    #[error("{lexeme}")]
    MalformedRealConstant { lexeme: String },
    #[error("Invalid string constant \"{lexeme}")]
    InvalidStringConstant { lexeme: String },
    #[error("Invalid character constant '{lexeme}'")]
    InvalidCharacterConstant { lexeme: String },
    #[error("New line is an invalid character constant")]
    NewlineInCharacterConstant,
    #[error("{lexeme}")]
    IncompleteLogicalOperator { lexeme: String },
}
