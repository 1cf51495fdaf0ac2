/// Represents the result of parsing an expression span for printing.
///
/// This enum models the value kinds an `io.out(...)` expression can carry.
/// The language does not distinguish numeric list items from string ones:
/// inside a `List`, every item is carried as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An empty expression span. Prints as a blank line.
    Empty,
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A quoted string with the delimiting quotes stripped.
    Text(String),
    /// An ordered sequence of string tokens from a `[...]` literal.
    List(Vec<String>),
    /// A span that matches no value form. Reported as a syntax error by the
    /// caller; it never prints.
    Invalid,
}

impl Value {
    /// Parses a trimmed, variable-resolved expression span into a `Value`.
    ///
    /// The forms are tried in order:
    /// - an empty span is `Empty`;
    /// - a span bracketed by `[` and `]` is a `List`, with the interior
    ///   split by [`parse_list_items`];
    /// - a span delimited by `"` on both ends is `Text` with the delimiting
    ///   pair stripped (embedded quote characters are not un-escaped);
    /// - a span that parses in its entirety as a decimal number is a
    ///   `Number` (partial numeric prefixes are rejected);
    /// - anything else is `Invalid`.
    ///
    /// # Example
    /// ```
    /// use zlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::parse(""), Value::Empty);
    /// assert_eq!(Value::parse("\"hi\""), Value::Text("hi".to_string()));
    /// assert_eq!(Value::parse("-2.5"), Value::Number(-2.5));
    /// assert_eq!(Value::parse("almost 7"), Value::Invalid);
    /// ```
    #[must_use]
    pub fn parse(span: &str) -> Self {
        if span.is_empty() {
            return Self::Empty;
        }

        if let Some(interior) = span.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return Self::List(parse_list_items(interior));
        }

        if span.len() >= 2
           && let Some(text) = span.strip_prefix('"').and_then(|rest| rest.strip_suffix('"'))
        {
            return Self::Text(text.to_string());
        }

        span.parse::<f64>().map_or(Self::Invalid, Self::Number)
    }

    /// Returns `true` if the value is [`Invalid`](Self::Invalid).
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty | Self::Invalid => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{item}")?;
                }

                Ok(())
            },
        }
    }
}

/// Splits the interior of a `[...]` literal into ordered items.
///
/// Items are comma-separated, with whitespace around each item skipped. An
/// item opened by `"` runs to the next `"` and is kept verbatim, including
/// leading or trailing spaces and any commas; an unterminated quote stops
/// the scan, returning the items gathered so far. A bare item runs to the
/// next `,` or the end of the interior and is kept only if it is non-empty
/// after trimming, so consecutive commas are silently dropped. Duplicates
/// are preserved, in source order.
#[must_use]
pub fn parse_list_items(interior: &str) -> Vec<String> {
    let bytes = interior.as_bytes();
    let mut items = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        if pos >= bytes.len() {
            break;
        }

        if bytes[pos] == b'"' {
            let start = pos + 1;
            let Some(end) = interior[start..].find('"') else {
                break;
            };
            items.push(interior[start..start + end].to_string());
            pos = start + end + 1;
        } else {
            let start = pos;
            while pos < bytes.len() && bytes[pos] != b',' {
                pos += 1;
            }
            let token = interior[start..pos].trim();
            if !token.is_empty() {
                items.push(token.to_string());
            }
        }

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos < bytes.len() && bytes[pos] == b',' {
            pos += 1;
        }
    }

    items
}
