#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all diagnostics a statement can produce instead of output.
///
/// Unlike a conventional error type, a `Diagnostic` is never propagated past
/// the statement that raised it: the interpreter converts it into exactly one
/// line of output and carries on with the next statement.
pub enum Diagnostic {
    /// A statement matched a known form but its delimiters or contents were
    /// malformed.
    SyntaxError {
        /// The construct that failed to parse, e.g. `"io.out()"`.
        construct: &'static str,
    },
    /// A call to a function that has not been defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A line that matches no recognized statement form.
    UnknownCommand {
        /// The offending line, echoed back verbatim.
        line: String,
    },
    /// A `loop` whose count expression did not resolve to an integer.
    InvalidLoopCount {
        /// The resolved count text that failed to parse.
        count: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SyntaxError { construct } => write!(f, "Syntax error in {construct}"),
            Self::UnknownFunction { name } => write!(f, "Unknown function: {name}"),
            Self::UnknownCommand { line } => write!(f, "Unknown command: {line}"),
            Self::InvalidLoopCount { count } => write!(f, "Invalid loop count: {count}"),
        }
    }
}

impl std::error::Error for Diagnostic {}
