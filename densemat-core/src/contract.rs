//! Debug-only precondition checks
//!
//! Indexing and arithmetic on a matrix trust the caller to respect shapes and
//! bounds. The checks in this module verify those preconditions in debug and
//! test builds and compile to nothing in release builds, unless the
//! `checked-contracts` feature keeps them on.

/// Whether [`contract_assert!`] evaluates its condition.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "checked-contracts"));

/// Assert a caller precondition when contract checks are enabled.
///
/// Accepts the same arguments as [`assert!`]. The condition is type-checked
/// in every build but only evaluated when [`ENABLED`] is true.
#[macro_export]
macro_rules! contract_assert {
    ($($arg:tt)+) => {
        if $crate::contract::ENABLED {
            ::core::assert!($($arg)+);
        }
    };
}

/// Equality form of [`contract_assert!`].
#[macro_export]
macro_rules! contract_assert_eq {
    ($($arg:tt)+) => {
        if $crate::contract::ENABLED {
            ::core::assert_eq!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_contract_holds() {
        contract_assert!(1 + 1 == 2);
        contract_assert_eq!(3, 3, "values differ");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "row 4 out of range")]
    fn test_contract_violation_panics_in_debug() {
        let row = 4;
        contract_assert!(row < 2, "row {row} out of range");
    }
}
