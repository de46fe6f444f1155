use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The source sequence had no elements at the time it was read.
    #[error("cannot select from an empty sequence")]
    EmptySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CycleError::EmptySequence.to_string(),
            "cannot select from an empty sequence"
        );
    }
}
