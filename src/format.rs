//! Identifier quoting and statement terminators.

/// Quote character used around every identifier.
pub const QUOTE: char = '`';

/// Wrap an identifier in backticks.
///
/// Embedded backticks are not escaped; identifiers containing them produce
/// invalid DDL.
pub fn quote(unquoted: &str) -> String {
    let mut quoted = String::with_capacity(unquoted.len() + 2);
    quoted.push(QUOTE);
    quoted.push_str(unquoted);
    quoted.push(QUOTE);
    quoted
}

/// Append a statement terminator.
pub fn semicolon(statement: &str) -> String {
    format!("{statement};")
}
