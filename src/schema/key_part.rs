use std::fmt;

use crate::format::quote;

/// A column reference inside a primary key or index, with its sort order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPart {
    pub column_name: String,
    pub is_descending: bool,
}

impl KeyPart {
    pub fn asc(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            is_descending: false,
        }
    }

    pub fn desc(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            is_descending: true,
        }
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.column_name))?;
        if self.is_descending {
            f.write_str(" DESC")?;
        }
        Ok(())
    }
}

/// Render key parts as a comma-separated list.
pub(crate) fn render_key_parts(parts: &[KeyPart]) -> String {
    parts
        .iter()
        .map(KeyPart::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(KeyPart::asc("ID").to_string(), "`ID`");
        assert_eq!(KeyPart::desc("CreatedAt").to_string(), "`CreatedAt` DESC");
    }

    #[test]
    fn test_render_list() {
        let parts = [KeyPart::asc("A"), KeyPart::desc("B")];
        assert_eq!(render_key_parts(&parts), "`A`, `B` DESC");
        assert_eq!(render_key_parts(&[]), "");
    }
}
