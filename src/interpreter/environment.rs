use std::collections::HashMap;

/// Stores the mutable state of one interpreter session.
///
/// This struct holds the two stores every statement reads or writes: the
/// variable store (name to raw value text) and the function store (name to
/// body text). Both stores keep values as unparsed text, exactly as they
/// appeared in the source; parsing happens at the point of use.
///
/// ## Usage
///
/// An `Environment` is created once per session and passed by reference into
/// every evaluation call. It is never shared between sessions and holds no
/// global state, so independent interpreters can run side by side.
pub struct Environment {
    /// A mapping from variable names to their raw, unresolved value text.
    /// Populated by `var` statements; last write wins.
    variables: HashMap<String, String>,
    /// A mapping from function names to their body text. Populated by `func`
    /// definitions; redefinition silently replaces the previous body.
    functions: HashMap<String, String>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an empty environment with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(), }
    }

    /// Inserts or overwrites a variable.
    ///
    /// The value is stored as literal text with no validation; whether it
    /// parses as a number, string, or list is only decided when the variable
    /// is used.
    pub fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    /// Inserts or overwrites a function body. A function with the same name
    /// as an existing one is silently replaced.
    pub fn define_function(&mut self, name: &str, body: &str) {
        self.functions.insert(name.to_string(), body.to_string());
    }

    /// Looks up the body text of a defined function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&str> {
        self.functions.get(name).map(String::as_str)
    }

    /// Read access to the variable store.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    /// Read access to the function store.
    #[must_use]
    pub const fn functions(&self) -> &HashMap<String, String> {
        &self.functions
    }

    /// Replaces every occurrence of every stored variable name in `text`
    /// with the variable's value.
    ///
    /// This is whole-text substring replacement, not token-aware: a variable
    /// named `a` matches and is replaced inside unrelated words containing
    /// the letter `a`. For each store entry the first remaining occurrence of
    /// the name is replaced and the scan repeats until none is left; entries
    /// are visited in the map's unspecified iteration order, so when one
    /// variable name is a substring of another the outcome depends on which
    /// entry is visited first.
    ///
    /// A value that contains its own variable name makes the replacement
    /// loop diverge (`var a = "a";` regenerates the occurrence it just
    /// replaced). This degenerate case is deliberately not guarded.
    ///
    /// Text containing no stored name is returned unchanged.
    ///
    /// # Example
    /// ```
    /// use zlang::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x", "5");
    ///
    /// assert_eq!(env.resolve("x > 3"), "5 > 3");
    /// assert_eq!(env.resolve("nothing here"), "nothing here");
    /// ```
    #[must_use]
    pub fn resolve(&self, text: &str) -> String {
        let mut resolved = text.to_string();

        for (name, value) in &self.variables {
            while let Some(pos) = resolved.find(name.as_str()) {
                resolved.replace_range(pos..pos + name.len(), value);
            }
        }

        resolved
    }
}
