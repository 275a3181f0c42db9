//! Input validation shared by every request constructor.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The input was empty or whitespace-only. Callers must refuse to build
    /// any request from it; submission controls should already have blocked
    /// this, the constructor enforces it again.
    #[error("input text is empty")]
    EmptyInput,
}

/// Trim user input and reject it when nothing remains.
pub fn clean_input(raw: &str) -> Result<&str, RequestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RequestError::EmptyInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean_input("  clause text \n"), Ok("clause text"));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(clean_input(""), Err(RequestError::EmptyInput));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert_eq!(clean_input(" \t\n "), Err(RequestError::EmptyInput));
    }
}
