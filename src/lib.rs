//! # zlang
//!
//! zlang is a minimal line-oriented scripting language interpreter written
//! in Rust. Each logical line is one statement: print output, variable
//! assignment, a single-shot conditional, a bounded counted loop, or a
//! zero-argument function definition or call.
//!
//! The language has no grammar and no syntax tree: lines are classified and
//! split by plain substring scanning, variables are substituted by
//! whole-text replacement, and blocks are the span between a line's first
//! `{` and first `}`. These are behavioral contracts of the language,
//! including their ambiguities, and the interpreter reproduces them
//! deliberately.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::core::Interpreter;

/// Provides statement diagnostics.
///
/// This module defines the diagnostics a statement can raise while being
/// classified or executed. Every diagnostic is converted into exactly one
/// human-readable line of output at the statement boundary; execution always
/// resumes with the next input line.
///
/// # Responsibilities
/// - Defines the `Diagnostic` enum for all rejection modes (syntax errors,
///   unknown functions, unknown commands, invalid loop counts).
/// - Renders each diagnostic as the single output line the user sees.
pub mod error;
/// Orchestrates statement classification and execution.
///
/// This module ties together the environment, condition evaluation, value
/// parsing, and control-flow execution to provide a complete runtime for the
/// language. It exposes the `Interpreter` entry point that processes one
/// statement line at a time.
///
/// # Responsibilities
/// - Coordinates all core components: dispatcher, environment, condition
///   evaluator, value parser, and control-flow runner.
/// - Provides the recursive dispatch entry point for blocks and bodies.
/// - Buffers textual output for the driver to drain.
pub mod interpreter;
/// Loads script files into a session.
///
/// This module resolves script names to paths, appending the default
/// extension when absent, and feeds each non-empty line of a script into the
/// interpreter in file order.
///
/// # Responsibilities
/// - Resolves and validates script paths.
/// - Reports missing or unreadable files without invoking the interpreter.
pub mod loader;
/// The interactive shell.
///
/// This module implements the read-eval-print loop on top of `rustyline`:
/// prompt, history, quit keywords, and the `load` directive. It feeds lines
/// into the interpreter and prints the buffered output.
///
/// # Responsibilities
/// - Reads lines interactively with history support.
/// - Handles the driver-level keywords (`q`, `quit`, `load`).
pub mod repl;

/// Runs every statement of a source string and returns the output lines.
///
/// Each non-empty trimmed line of `source` is executed in order against a
/// fresh interpreter session. The collected output contains one entry per
/// printed value or diagnostic, in execution order.
///
/// # Examples
/// ```
/// use zlang::run_script;
///
/// let output = run_script("var x = 3;\nio.out(x);");
/// assert_eq!(output, vec!["3".to_string()]);
///
/// // A rejected line produces exactly one diagnostic line and execution
/// // continues.
/// let output = run_script("nonsense\nio.out(\"ok\");");
/// assert_eq!(output,
///            vec!["Unknown command: nonsense".to_string(), "ok".to_string()]);
/// ```
#[must_use]
pub fn run_script(source: &str) -> Vec<String> {
    let mut interpreter = Interpreter::new();

    for line in source.lines() {
        let line = line.trim();
        if !line.is_empty() {
            interpreter.run_line(line);
        }
    }

    interpreter.drain_output()
}
