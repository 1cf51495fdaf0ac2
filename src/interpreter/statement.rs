use crate::error::Diagnostic;

/// A transient classification of one line of text.
///
/// A `Statement` borrows its sub-spans from the classified line; it is
/// produced and consumed within a single dispatch call and never stored.
#[derive(Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `io.out(<expr>);`. `expr` is the text strictly between the first
    /// `(` and the last `)`, trimmed.
    Print {
        /// The unresolved expression span.
        expr: &'a str,
    },
    /// `var <name> = <value>;`. Both sides trimmed; the statement
    /// terminator is not part of the value.
    Assign {
        /// The variable name.
        name: &'a str,
        /// The raw, unresolved value text.
        value: &'a str,
    },
    /// `if <cond> { <block> }`.
    If {
        /// The unresolved condition span.
        cond: &'a str,
        /// The block span, dispatched at most once.
        block: &'a str,
    },
    /// `loop <count> { <block> }`.
    Loop {
        /// The unresolved count expression.
        count: &'a str,
        /// The block span, dispatched `count` times.
        block: &'a str,
    },
    /// `func <name>() { <body> }`.
    FuncDef {
        /// The function name.
        name: &'a str,
        /// The body span, stored as text.
        body: &'a str,
    },
    /// `<name>();`. `name` is everything before the `();` marker,
    /// untrimmed.
    FuncCall {
        /// The function name.
        name: &'a str,
    },
    /// A line matching no recognized statement form.
    Unrecognized {
        /// The raw line, echoed back in the diagnostic.
        raw: &'a str,
    },
}

/// The textual span between a line's first `{` and first `}`, with the
/// position of the `{`.
///
/// The scan is not nesting-aware: the block terminates at the first `}`
/// encountered, regardless of any `{` inside it. This is the language's
/// contract for blocks and function bodies, reproduced deliberately.
fn block_span(line: &str) -> Option<(usize, &str)> {
    let open = line.find('{')?;
    let close = line.find('}')?;

    (close > open).then(|| (open, line[open + 1..close].trim()))
}

impl<'a> Statement<'a> {
    /// Classifies a trimmed top-level input line.
    ///
    /// The control-flow forms `func`, `if`, and `loop` are recognized first,
    /// in that order; every other line falls through to
    /// [`classify_nested`](Self::classify_nested). A control-flow keyword
    /// with malformed delimiters is a syntax error, not an unknown command.
    pub fn classify_line(line: &'a str) -> Result<Self, Diagnostic> {
        if let Some(rest) = line.strip_prefix("func ") {
            return Self::classify_func_def(rest);
        }

        if let Some(rest) = line.strip_prefix("if ") {
            let Some((open, block)) = block_span(rest) else {
                return Err(Diagnostic::SyntaxError { construct: "if statement" });
            };
            return Ok(Self::If { cond: rest[..open].trim(),
                                 block });
        }

        if let Some(rest) = line.strip_prefix("loop ") {
            let Some((open, block)) = block_span(rest) else {
                return Err(Diagnostic::SyntaxError { construct: "loop statement" });
            };
            return Ok(Self::Loop { count: rest[..open].trim(),
                                   block });
        }

        Self::classify_nested(line)
    }

    /// Classifies a nested statement span: a called function's body or the
    /// block of an `if` or `loop`.
    ///
    /// First match wins:
    /// 1. a span starting with `io.out(` and ending with `;` is a print
    ///    statement (matched first so that the empty-parentheses form
    ///    `io.out();` is not swallowed by the call rule below);
    /// 2. a span containing `();` anywhere is a function call; the name is
    ///    everything before that substring;
    /// 3. a span starting with `var ` is an assignment; the value is the
    ///    trimmed text after the first `=`, with one trailing `;` (the
    ///    statement terminator) stripped;
    /// 4. anything else is unrecognized.
    ///
    /// The control-flow forms are deliberately absent here: a `func`, `if`,
    /// or `loop` inside a block is an unknown command.
    pub fn classify_nested(span: &'a str) -> Result<Self, Diagnostic> {
        if span.ends_with(';') && let Some(rest) = span.strip_prefix("io.out(") {
            let Some(close) = rest.rfind(')') else {
                return Err(Diagnostic::SyntaxError { construct: "io.out()" });
            };
            return Ok(Self::Print { expr: rest[..close].trim() });
        }

        if let Some(pos) = span.find("();") {
            return Ok(Self::FuncCall { name: &span[..pos] });
        }

        if let Some(rest) = span.strip_prefix("var ") {
            let Some(pos) = rest.find('=') else {
                return Err(Diagnostic::SyntaxError { construct: "var declaration" });
            };
            let value = rest[pos + 1..].trim();
            let value = value.strip_suffix(';').map_or(value, str::trim_end);
            return Ok(Self::Assign { name: rest[..pos].trim(),
                                     value });
        }

        Ok(Self::Unrecognized { raw: span })
    }

    /// Classifies the remainder of a `func ` line.
    ///
    /// The name is the text before the literal `()`; the body is the first
    /// brace-delimited span. A missing `()`, `{`, or `}`, or parentheses
    /// appearing after the opening brace, is a syntax error.
    fn classify_func_def(rest: &'a str) -> Result<Self, Diagnostic> {
        let diagnostic = Diagnostic::SyntaxError { construct: "function definition" };

        let Some(parens) = rest.find("()") else {
            return Err(diagnostic);
        };
        let Some((open, body)) = block_span(rest) else {
            return Err(diagnostic);
        };
        if parens > open {
            return Err(diagnostic);
        }

        Ok(Self::FuncDef { name: rest[..parens].trim(),
                           body })
    }
}
