/// Statement diagnostics.
///
/// Defines the `Diagnostic` enum covering every way a statement can be
/// rejected: malformed syntax, calls to undefined functions, unrecognized
/// commands, and invalid loop counts. A diagnostic is reported as a plain
/// line of output and never aborts the session.
pub mod diagnostic;

pub use diagnostic::Diagnostic;
