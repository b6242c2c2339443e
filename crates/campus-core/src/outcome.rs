//! Success / domain-failure outcome of an engine operation.

/// Result of an engine operation that completed.
///
/// `Failure` means a business rule refused the change and the store was left
/// untouched. It is returned inside `Ok(..)`; only protocol errors use `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S, F> {
    /// The change was applied.
    Success(S),
    /// A business rule rejected the change.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Returns `true` for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into the success payload, discarding a failure.
    #[must_use]
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success(s) => Some(s),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure reason, discarding a success.
    #[must_use]
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    pub fn map<T>(self, op: impl FnOnce(S) -> T) -> Outcome<T, F> {
        match self {
            Self::Success(s) => Outcome::Success(op(s)),
            Self::Failure(f) => Outcome::Failure(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome: Outcome<u32, &str> = Outcome::Success(3);

        assert!(outcome.is_success());
        assert_eq!(outcome.clone().success(), Some(3));
        assert_eq!(outcome.failure(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let outcome: Outcome<u32, &str> = Outcome::Failure("event full");

        assert!(!outcome.is_success());
        assert_eq!(outcome.clone().success(), None);
        assert_eq!(outcome.failure(), Some("event full"));
    }

    #[test]
    fn test_map_only_touches_success() {
        let ok: Outcome<u32, &str> = Outcome::Success(2);
        let failed: Outcome<u32, &str> = Outcome::Failure("slot taken");

        assert_eq!(ok.map(|n| n * 10), Outcome::Success(20));
        assert_eq!(failed.map(|n| n * 10), Outcome::Failure("slot taken"));
    }
}
