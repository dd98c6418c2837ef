use crate::hedi_error::HediError;

/// Structures that can check their own topology invariants.
pub trait DebugInvariants {
    /// Panic on the first violation, but only when invariant checking is
    /// compiled in (debug builds, `strict-invariants`, `check-invariants`).
    fn debug_assert_invariants(&self);
    /// Run every check and report the first violation.
    fn validate_invariants(&self) -> Result<(), HediError>;
}

/// Evaluate a `Result`-returning check and panic with `$ctx` on `Err`.
///
/// Compiles to nothing unless invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
