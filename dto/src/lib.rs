#[allow(unused_imports)]
use serde::{Deserialize, Serialize};

/// Longest prompt accepted after trimming, in characters.
pub const MAX_PROMPT_CHARS: usize = 2000;

#[derive(Debug)]
#[cfg_attr(feature = "backend", derive(Deserialize))]
#[cfg_attr(feature = "frontend", derive(Serialize))]
pub struct ChatRequest {
    pub prompt: String,
}

#[derive(Debug)]
#[cfg_attr(feature = "backend", derive(Serialize))]
#[cfg_attr(feature = "frontend", derive(Deserialize))]
pub struct ChatReply {
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("prompt must not be empty")]
    Empty,
    #[error("prompt is too long: {0} characters")]
    TooLong(usize),
}

/// Both sides agree on what a sendable prompt is: the frontend treats a
/// failure as a submit no-op, the backend as a 400.
pub fn validate_prompt(prompt: &str) -> Result<&str, PromptError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(PromptError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_PROMPT_CHARS {
        return Err(PromptError::TooLong(len));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_a_normal_prompt() {
        assert_eq!(
            validate_prompt("  Is plastic recyclable?\n"),
            Ok("Is plastic recyclable?")
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(validate_prompt(""), Err(PromptError::Empty));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert_eq!(validate_prompt(" \n\t  "), Err(PromptError::Empty));
    }

    #[test]
    fn rejects_over_length_input() {
        let long = "a".repeat(MAX_PROMPT_CHARS + 1);
        assert_eq!(
            validate_prompt(&long),
            Err(PromptError::TooLong(MAX_PROMPT_CHARS + 1))
        );
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let padded = format!("  {}  ", "a".repeat(MAX_PROMPT_CHARS));
        assert!(validate_prompt(&padded).is_ok());
    }
}
