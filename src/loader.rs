use std::{fs, path::{Path, PathBuf}};

use crate::interpreter::core::Interpreter;

/// The extension appended to script names given without one.
pub const SCRIPT_EXTENSION: &str = "zl";

#[derive(Debug)]
/// Represents the ways loading a script file can fail.
///
/// Loading fails before the interpreter sees a single line; a load error
/// never leaves the session in a partially-executed state.
pub enum LoadError {
    /// The resolved script path does not exist.
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// The script exists but could not be read.
    Unreadable {
        /// The path that could not be read.
        path: PathBuf,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "File not found: {}", path.display()),
            Self::Unreadable { path } => write!(f, "Could not open file: {}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {}

/// Resolves a script name to a path, appending the `.zl` extension when the
/// name has none.
#[must_use]
pub fn resolve_path(name: &str) -> PathBuf {
    let path = Path::new(name);

    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(SCRIPT_EXTENSION)
    }
}

/// Loads a script file and feeds it to the interpreter, line by line.
///
/// Each non-empty trimmed line of the file is run in file order against the
/// given session, so a loaded script sees and mutates the same variables
/// and functions as the surrounding session. Output accumulates in the
/// interpreter's buffer for the caller to drain.
///
/// # Errors
/// Returns [`LoadError::NotFound`] when the resolved path does not exist and
/// [`LoadError::Unreadable`] when it exists but cannot be read. In both
/// cases the interpreter is not invoked at all.
pub fn load(interpreter: &mut Interpreter, name: &str) -> Result<(), LoadError> {
    let path = resolve_path(name);

    if !path.exists() {
        return Err(LoadError::NotFound { path });
    }

    let source = fs::read_to_string(&path).map_err(|_| LoadError::Unreadable { path })?;

    for line in source.lines() {
        let line = line.trim();
        if !line.is_empty() {
            interpreter.run_line(line);
        }
    }

    Ok(())
}
