use crate::{
    error::Diagnostic,
    interpreter::{condition, core::{ExecResult, Interpreter}},
};

impl Interpreter {
    /// Executes a one-shot conditional.
    ///
    /// When the condition evaluates to true the block is dispatched as one
    /// statement, exactly once; when false nothing happens. There is no
    /// else branch.
    pub(crate) fn run_if(&mut self, cond: &str, block: &str) {
        if condition::evaluate(&self.env, cond) {
            self.dispatch(block);
        }
    }

    /// Executes a bounded loop.
    ///
    /// The count expression is variable-resolved and parsed as an integer; a
    /// non-integer count is an invalid-loop-count diagnostic and the loop
    /// does not execute. The block is dispatched as one statement exactly
    /// `count` times, sequentially, with no early exit: an iteration that
    /// produces a diagnostic still counts and the remaining iterations run.
    /// A count of zero or less executes zero times.
    pub(crate) fn run_loop(&mut self, count: &str, block: &str) -> ExecResult<()> {
        let count_text = self.env.resolve(count);
        let Ok(count) = count_text.trim().parse::<i64>() else {
            return Err(Diagnostic::InvalidLoopCount { count: count_text });
        };

        for _ in 0..count.max(0) {
            self.dispatch(block);
        }
        Ok(())
    }
}
