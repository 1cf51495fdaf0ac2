/// Core statement execution and dispatch.
///
/// Contains the `Interpreter` struct holding the session state and output
/// buffer, the top-level line classification, and the recursive statement
/// dispatcher that the other components feed into.
pub mod core;

/// Statement classification.
///
/// Defines the transient `Statement` enum and the substring-scanning rules
/// that classify one line of text into a statement kind and extract its
/// sub-spans (condition text, block text, expression text).
pub mod statement;

/// Control-flow execution.
///
/// Implements the `func` definition form, the one-shot `if` conditional, and
/// the bounded `loop`, each re-entering the dispatcher on its extracted
/// block or body text.
pub mod control_flow;

/// Session state: the variable and function stores.
///
/// Defines the `Environment` owned by each interpreter session, along with
/// variable resolution by substring substitution.
pub mod environment;

/// Condition evaluation.
///
/// Resolves variables inside a condition span and evaluates literal booleans
/// or a single binary integer comparison.
pub mod condition;

/// Value parsing and display.
///
/// Defines the `Value` enum produced by parsing an expression span for
/// printing, including the comma-separated list scanner.
pub mod value;
