//! Self-check capability for domain types.

/// A type that can check its own internal consistency.
///
/// Check layers call [`validate`](Validatable::validate) on structures
/// that opt in, typically right after construction or deserialization.
/// Opting in is a compile-time fact: a type without the impl simply has
/// no hook to call, and nothing is looked up at runtime.
///
/// `validate` returns `false` when the structure is inconsistent; it must
/// not panic. Reporting *why* is the caller's job (usually by failing a
/// check with a descriptive template).
pub trait Validatable {
    /// Returns `true` if the structure is internally consistent.
    fn validate(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window {
        lo: i64,
        hi: i64,
    }

    impl Validatable for Window {
        fn validate(&self) -> bool {
            self.lo <= self.hi
        }
    }

    #[test]
    fn validate_reports_consistency() {
        assert!(Window { lo: 1, hi: 4 }.validate());
        assert!(!Window { lo: 4, hi: 1 }.validate());
    }
}
