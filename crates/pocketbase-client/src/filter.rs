//! Helpers for building PocketBase filter expressions.
//!
//! Filter values are embedded in the expression string, so anything
//! user-supplied must go through [`quote`].

/// Quote a value for use in a filter expression, escaping backslashes and
/// double quotes.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// `field ~ "value"`, case-insensitive contains.
pub fn contains(field: &str, value: &str) -> String {
    format!("{field} ~ {}", quote(value))
}

/// `field = "value"`, equality.
pub fn equals(field: &str, value: &str) -> String {
    format!("{field} = {}", quote(value))
}

/// `field != "value"`, inequality.
pub fn not_equals(field: &str, value: &str) -> String {
    format!("{field} != {}", quote(value))
}

/// Join clauses with `||`.
pub fn any_of(clauses: &[String]) -> String {
    clauses.join(" || ")
}

/// Join clauses with `&&`.
pub fn all_of(clauses: &[String]) -> String {
    clauses.join(" && ")
}
