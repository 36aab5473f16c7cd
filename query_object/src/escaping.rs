//! Escaping module
//!
//! This module turns user-supplied identifiers, columns and values into text
//! that can be embedded in a query.

use config::EscapeStrategy;
use serde_json::Value;

/// Wrap an identifier (measurement or retention policy) in double quotes
pub fn quote_identifier(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Escape a condition column
///
/// `InfluxLiteral` emits the column as a double-quoted identifier.
pub fn escape_column(strategy: EscapeStrategy, column: &str) -> String {
    match strategy {
        EscapeStrategy::PercentEncode => urlencoding::encode(column).into_owned(),
        EscapeStrategy::InfluxLiteral => quote_identifier(column),
    }
}

/// Escape a condition value for use inside single quotes
pub fn escape_value(strategy: EscapeStrategy, value: &str) -> String {
    match strategy {
        EscapeStrategy::PercentEncode => urlencoding::encode(value).into_owned(),
        EscapeStrategy::InfluxLiteral => {
            let mut escaped = String::with_capacity(value.len());
            for c in value.chars() {
                if c == '\'' || c == '\\' {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped
        }
    }
}

/// Render a regex pattern as a `/pattern/` literal
///
/// Surrounding slashes are optional. Unescaped inner slashes get a backslash.
/// Regex literals are never quoted or percent-encoded.
pub fn regex_literal(pattern: &str) -> String {
    let body = match pattern.strip_prefix('/').and_then(|p| p.strip_suffix('/')) {
        Some(inner) => inner,
        None => pattern,
    };

    let mut literal = String::with_capacity(body.len() + 2);
    literal.push('/');
    let mut escaped = false;
    for c in body.chars() {
        if c == '/' && !escaped {
            literal.push('\\');
        }
        escaped = c == '\\' && !escaped;
        literal.push(c);
    }
    literal.push('/');
    literal
}

/// Render a condition value as bare text, before escaping
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays and objects have no literal form; compact JSON keeps them readable
        other => other.to_string(),
    }
}
