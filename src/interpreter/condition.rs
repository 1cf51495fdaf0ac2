use crate::interpreter::environment::Environment;

/// The comparison operators a condition may contain, in priority order.
///
/// The first operator of this list that occurs anywhere in the condition
/// text wins; `==` and `!=` are listed before `>` and `<` so that a compound
/// operator is never split at its second character.
const OPERATORS: [&str; 4] = ["==", "!=", ">", "<"];

/// Evaluates a condition span against the variable store.
///
/// The span is variable-resolved, trimmed, and ASCII-lowercased. The
/// literals `true` and `false` evaluate to themselves. Otherwise the span is
/// split at the first textual occurrence of the highest-priority operator it
/// contains, both sides are trimmed and parsed as base-10 integers, and the
/// corresponding comparison is applied.
///
/// Anything else evaluates to `false`: a span with no operator, an operand
/// that is not entirely an integer, or an empty span. This silent fallback
/// is the language's behavior, not an error. No other operators (`>=`,
/// `<=`, boolean `and`/`or`) are supported.
///
/// # Example
/// ```
/// use zlang::interpreter::{condition::evaluate, environment::Environment};
///
/// let mut env = Environment::new();
/// env.set_variable("a", "5");
///
/// assert!(evaluate(&env, "TRUE"));
/// assert!(evaluate(&env, "a == 5"));
/// assert!(!evaluate(&env, "a > 10"));
/// assert!(!evaluate(&env, "pigs can fly"));
/// ```
#[must_use]
pub fn evaluate(env: &Environment, cond: &str) -> bool {
    let cond = env.resolve(cond).trim().to_ascii_lowercase();

    if cond == "true" {
        return true;
    }
    if cond == "false" {
        return false;
    }

    for op in OPERATORS {
        if let Some(pos) = cond.find(op) {
            let lhs = cond[..pos].trim().parse::<i64>();
            let rhs = cond[pos + op.len()..].trim().parse::<i64>();

            return match (lhs, rhs) {
                (Ok(lhs), Ok(rhs)) => match op {
                    "==" => lhs == rhs,
                    "!=" => lhs != rhs,
                    ">" => lhs > rhs,
                    "<" => lhs < rhs,
                    _ => unreachable!(),
                },
                _ => false,
            };
        }
    }

    false
}
