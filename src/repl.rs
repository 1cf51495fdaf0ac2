use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::{interpreter::core::Interpreter, loader};

/// Result of processing a single shell line.
enum LineAction {
    /// Keep reading input.
    Continue,
    /// A quit keyword was entered; leave the shell.
    Quit,
}

/// Processes one line of shell input and returns the lines to display.
///
/// This function is the testable core of the shell loop; it has no I/O
/// dependencies beyond the `Interpreter`. The quit keywords (`q` and `quit`,
/// exact and case-sensitive) and the `load <name>` directive are handled
/// here, in the driver; everything else goes to the interpreter.
fn process_line(interpreter: &mut Interpreter, line: &str) -> (LineAction, Vec<String>) {
    let line = line.trim();

    if line == "q" || line == "quit" {
        return (LineAction::Quit, Vec::new());
    }

    if let Some(name) = line.strip_prefix("load ") {
        let mut output = Vec::new();
        if let Err(err) = loader::load(interpreter, name.trim()) {
            output.push(err.to_string());
        }
        output.extend(interpreter.drain_output());
        return (LineAction::Continue, output);
    }

    interpreter.run_line(line);
    (LineAction::Continue, interpreter.drain_output())
}

/// Runs the interactive shell until a quit keyword or end of input.
pub fn run_repl() {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Failed to initialize line editor: {err}");
            std::process::exit(1);
        },
    };

    let history_path = history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    let mut interpreter = Interpreter::new();
    println!("zlang shell - type 'quit' to exit");

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let (action, output) = process_line(&mut interpreter, &line);
                for text in output {
                    println!("{text}");
                }
                if matches!(action, LineAction::Quit) {
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: cancel the current line
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl-D: exit
                break;
            },
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            },
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

fn history_path() -> Option<std::path::PathBuf> {
    let home = std::env::var("HOME").ok()?;
    let dir = std::path::PathBuf::from(home).join(".zlang");
    let _ = std::fs::create_dir_all(&dir);
    Some(dir.join("history"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: feed lines into the shell core and collect all display
    /// output.
    fn shell_session(lines: &[&str]) -> Vec<String> {
        let mut interpreter = Interpreter::new();
        let mut outputs = Vec::new();

        for line in lines {
            let (action, output) = process_line(&mut interpreter, line);
            outputs.extend(output);
            if matches!(action, LineAction::Quit) {
                break;
            }
        }
        outputs
    }

    #[test]
    fn quit_keywords_are_exact_and_case_sensitive() {
        let mut interpreter = Interpreter::new();

        assert!(matches!(process_line(&mut interpreter, "q").0, LineAction::Quit));
        assert!(matches!(process_line(&mut interpreter, "quit").0, LineAction::Quit));
        assert!(matches!(process_line(&mut interpreter, "QUIT").0, LineAction::Continue));
        assert!(matches!(process_line(&mut interpreter, "quit;").0, LineAction::Continue));
    }

    #[test]
    fn statements_after_quit_are_not_run() {
        let out = shell_session(&["io.out(1);", "quit", "io.out(2);"]);
        assert_eq!(out, vec!["1".to_string()]);
    }

    #[test]
    fn load_of_missing_file_reports_and_continues() {
        let out = shell_session(&["load does-not-exist", "io.out(\"still here\");"]);
        assert_eq!(out,
                   vec!["File not found: does-not-exist.zl".to_string(),
                        "still here".to_string()]);
    }

    #[test]
    fn load_runs_a_script_in_the_current_session() {
        // Extensionless name: the loader appends `.zl`. Tests run from the
        // crate root, so this resolves to tests/example.zl.
        let out = shell_session(&["load tests/example",
                                  "io.out(countdown);",
                                  "launch();"]);
        assert_eq!(out,
                   vec!["zlang lives".to_string(),
                        "3, 2, 1".to_string(),
                        "liftoff".to_string(),
                        "liftoff".to_string(),
                        "liftoff".to_string(),
                        "done".to_string(),
                        // The loaded variables and functions stay defined.
                        "3, 2, 1".to_string(),
                        "liftoff".to_string()]);
    }

    #[test]
    fn session_state_survives_across_lines() {
        let out = shell_session(&["var x = 41;", "var x = 42;", "io.out(x);"]);
        assert_eq!(out, vec!["42".to_string()]);
    }
}
