use crate::{
    error::Diagnostic,
    interpreter::{environment::Environment, statement::Statement, value::Value},
};

/// Result type used by statement execution helpers.
///
/// A `Diagnostic` on the error side is not an abort: the caller converts it
/// into one line of output at the statement boundary and continues.
pub type ExecResult<T> = Result<T, Diagnostic>;

/// Executes statements against one session's environment.
///
/// This struct owns the session [`Environment`] and a buffer of output
/// lines. Statements never write to stdout themselves; they push lines into
/// the buffer and the driver drains it after each input line, which keeps
/// the core free of I/O and directly testable.
///
/// ## Usage
///
/// An `Interpreter` is created once per session. Each input line goes
/// through [`run_line`](Self::run_line); nested block and body text
/// re-enters [`dispatch`](Self::dispatch) recursively.
pub struct Interpreter {
    pub(crate) env: Environment,
    output: Vec<String>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with an empty environment and no buffered
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self { env:    Environment::new(),
               output: Vec::new(), }
    }

    /// Read access to the session environment.
    #[must_use]
    pub const fn env(&self) -> &Environment {
        &self.env
    }

    /// Returns the buffered output lines, leaving the buffer empty.
    pub fn drain_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Pushes one line into the output buffer.
    fn emit(&mut self, line: String) {
        self.output.push(line);
    }

    /// Converts a diagnostic into its single line of output.
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.output.push(diagnostic.to_string());
    }

    /// Processes one input line: the top level of the evaluator.
    ///
    /// The line is trimmed; an empty line is ignored. Classification
    /// recognizes the control-flow forms `func`, `if`, and `loop` before the
    /// plain statement forms. No statement form ever spans multiple input
    /// lines.
    ///
    /// # Example
    /// ```
    /// use zlang::interpreter::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.run_line("var greeting = \"hello\";");
    /// interpreter.run_line("io.out(greeting);");
    ///
    /// assert_eq!(interpreter.drain_output(), vec!["hello".to_string()]);
    /// ```
    pub fn run_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match Statement::classify_line(line) {
            Ok(statement) => self.exec(&statement),
            Err(diagnostic) => self.report(&diagnostic),
        }
    }

    /// Dispatches a nested statement span: a called function's body or the
    /// block of an `if` or `loop`.
    ///
    /// This is the recursive entry point of the evaluator. Only the plain
    /// statement forms are recognized here; a control-flow keyword inside a
    /// block is reported as an unknown command. A function whose body calls
    /// itself recurses on the host call stack with no depth guard;
    /// exhausting the stack is the one fatal, unrecoverable failure mode of
    /// the language.
    ///
    /// Every diagnostic is converted to output at this boundary, so a
    /// failing statement inside a loop body never aborts the remaining
    /// iterations.
    pub fn dispatch(&mut self, span: &str) {
        match Statement::classify_nested(span) {
            Ok(statement) => self.exec(&statement),
            Err(diagnostic) => self.report(&diagnostic),
        }
    }

    /// Executes one classified statement.
    fn exec(&mut self, statement: &Statement<'_>) {
        let result = match statement {
            Statement::Print { expr } => self.run_print(expr),
            Statement::Assign { name, value } => {
                self.env.set_variable(name, value);
                Ok(())
            },
            Statement::If { cond, block } => {
                self.run_if(cond, block);
                Ok(())
            },
            Statement::Loop { count, block } => self.run_loop(count, block),
            Statement::FuncDef { name, body } => {
                self.env.define_function(name, body);
                Ok(())
            },
            Statement::FuncCall { name } => self.run_call(name),
            Statement::Unrecognized { raw } => {
                Err(Diagnostic::UnknownCommand { line: (*raw).to_string() })
            },
        };

        if let Err(diagnostic) = result {
            self.report(&diagnostic);
        }
    }

    /// Executes a call to a zero-argument function.
    ///
    /// The stored body text is itself a single statement span and is
    /// re-dispatched as one.
    fn run_call(&mut self, name: &str) -> ExecResult<()> {
        let Some(body) = self.env.function(name).map(str::to_string) else {
            return Err(Diagnostic::UnknownFunction { name: name.to_string() });
        };

        self.dispatch(&body);
        Ok(())
    }

    /// Executes a print statement.
    ///
    /// The expression span is variable-resolved and parsed as a [`Value`].
    /// List items are joined by `", "`, text prints unquoted, numbers print
    /// in their default decimal form, and an empty expression prints a blank
    /// line. Content that matches no value form prints a syntax-error
    /// diagnostic instead of output.
    fn run_print(&mut self, expr: &str) -> ExecResult<()> {
        let content = self.env.resolve(expr);
        let value = Value::parse(content.trim());

        if value.is_invalid() {
            return Err(Diagnostic::SyntaxError { construct: "io.out()" });
        }

        self.emit(value.to_string());
        Ok(())
    }
}
