//! # Error Types

/// Errors from runeword operations.
#[derive(Debug, thiserror::Error)]
pub enum RunewordError {
    /// A vocabulary line has an unsupported shape, or an unusable id.
    #[error("invalid content: {content:?} at line {line}")]
    MalformedVocabLine {
        /// The 1-based line number.
        line: usize,

        /// The raw, untrimmed line.
        content: String,
    },

    /// The vocabulary field separator was empty.
    #[error("vocabulary separator must not be empty")]
    EmptySeparator,

    /// A token cannot be written as a vocabulary line that reads back unchanged.
    #[error("token {token:?} cannot be written with separator {separator:?}")]
    UnwritableToken {
        /// The token.
        token: String,

        /// The field separator.
        separator: String,
    },

    /// A lookup missed, and the unknown token is not in the vocabulary either.
    #[error("no entry for {key:?}, and unknown token {unk_token:?} is not in the vocabulary")]
    MissingUnknownToken {
        /// The configured unknown token.
        unk_token: String,

        /// The token or id which missed.
        key: String,
    },

    /// Token id out of range for the target type.
    #[error("token id {value} out of range")]
    TokenOutOfRange {
        /// The id which did not fit.
        value: String,
    },

    /// The tokenizer engine rejected an input, or failed to pad a batch.
    ///
    /// The engine error is carried verbatim.
    #[error("{0}")]
    EngineEncodeFailure(tokenizers::Error),

    /// The tokenizer engine rejected a model configuration.
    #[error("tokenizer engine configuration: {0}")]
    EngineConfig(tokenizers::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for runeword operations.
pub type RWResult<T> = core::result::Result<T, RunewordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RunewordError::MalformedVocabLine {
            line: 3,
            content: "a\tb\tc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid content: \"a\\tb\\tc\" at line 3");

        let err = RunewordError::MissingUnknownToken {
            unk_token: "OOV".to_string(),
            key: "x".to_string(),
        };
        assert_eq!(
            RunewordError::UnwritableToken {
                token: " x".to_string(),
                separator: "\t".to_string(),
            }
            .to_string(),
            "token \" x\" cannot be written with separator \"\\t\""
        );

        assert_eq!(
            err.to_string(),
            "no entry for \"x\", and unknown token \"OOV\" is not in the vocabulary"
        );
    }

    #[test]
    fn test_errors_cross_the_engine_boundary() {
        let boxed: tokenizers::Error = RunewordError::EmptySeparator.into();
        assert!(matches!(
            boxed.downcast_ref::<RunewordError>(),
            Some(RunewordError::EmptySeparator)
        ));

        let err = RunewordError::EngineEncodeFailure(boxed);
        assert_eq!(err.to_string(), "vocabulary separator must not be empty");
    }
}
