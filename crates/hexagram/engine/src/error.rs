use thiserror::Error;

/// Errors from the synthesis boundary.
///
/// Both variants fail fast before any analysis level executes and are
/// recoverable by correcting the input. Missing optional context is never
/// an error; it degrades to documented defaults instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("invalid hexagram id: {id} (expected 1..=64)")]
    InvalidId { id: u8 },

    #[error("malformed options: {reason}")]
    MalformedOptions { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_names_the_offender() {
        let err = SynthesisError::InvalidId { id: 65 };
        assert!(err.to_string().contains("65"));
    }

    #[test]
    fn malformed_options_carries_the_reason() {
        let err = SynthesisError::MalformedOptions {
            reason: "persona weights sum to 1.5".into(),
        };
        assert!(err.to_string().contains("1.5"));
    }
}
