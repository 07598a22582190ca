use thiserror::Error;

/// Errors from the codec boundary.
///
/// Both variants are caller-recoverable by correcting the input; no other
/// operation in the engine can fail once a [`crate::HexagramId`] exists.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexagramError {
    #[error("invalid hexagram id: {id} (expected 1..=64)")]
    InvalidId { id: u8 },

    #[error("unknown line pattern: {lines} lines is not a canonical six-line hexagram")]
    UnknownPattern { lines: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_names_the_offender() {
        let err = HexagramError::InvalidId { id: 65 };
        assert!(err.to_string().contains("65"));
    }

    #[test]
    fn unknown_pattern_names_the_length() {
        let err = HexagramError::UnknownPattern { lines: 3 };
        assert!(err.to_string().contains("3 lines"));
    }
}
