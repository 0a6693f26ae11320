//! Identifier case conversion for `rename_all`

/// Convert string to snake_case
pub fn snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Convert string to PascalCase
pub fn pascal_case(s: &str) -> String {
    convert_underscores(s, true)
}

/// Convert string to camelCase
pub fn camel_case(s: &str) -> String {
    convert_underscores(s, false)
}

fn convert_underscores(s: &str, capitalize_first: bool) -> String {
    let mut result = String::new();
    let mut capitalize = capitalize_first;
    for c in s.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            result.extend(c.to_uppercase());
            capitalize = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Strip the `r#` prefix of a raw identifier
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
