//! Attribute parsing utilities

use syn::{Attribute, Expr, ExprLit, Field, Lit, LitStr};

use crate::utils;

/// Extract a `#[name = "value"]` string attribute
///
/// Returns an error spanning the attribute when it is present but not a
/// string literal in name-value form.
pub fn extract_str(attrs: &[Attribute], name: &str) -> syn::Result<Option<LitStr>> {
    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        let meta = attr.meta.require_name_value()?;
        if let Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) = &meta.value
        {
            return Ok(Some(s.clone()));
        }
        return Err(syn::Error::new_spanned(
            &meta.value,
            format!("expected #[{name} = \"...\"]"),
        ));
    }
    Ok(None)
}

/// Collect every `#[tag(namespace = "raw")]` pair of a field, in order
pub fn extract_tags(field: &Field) -> syn::Result<Vec<(String, String)>> {
    let mut tags = Vec::new();
    for attr in &field.attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let namespace = meta
                .path
                .get_ident()
                .map(ToString::to_string)
                .ok_or_else(|| meta.error("expected a tag namespace such as `db`"))?;
            let raw: LitStr = meta.value()?.parse()?;
            tags.push((namespace, raw.value()));
            Ok(())
        })?;
    }
    Ok(tags)
}

/// Struct-level `rename_all` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Verbatim,
    PascalCase,
    CamelCase,
    SnakeCase,
}

impl RenameRule {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let Some(lit) = extract_str(attrs, "rename_all")? else {
            return Ok(RenameRule::Verbatim);
        };
        match lit.value().as_str() {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            other => Err(syn::Error::new_spanned(
                &lit,
                format!(
                    "unknown rename_all rule `{other}`; expected \"PascalCase\", \"camelCase\" or \"snake_case\""
                ),
            )),
        }
    }

    pub fn apply(self, ident: &str) -> String {
        let ident = utils::unraw(ident);
        match self {
            RenameRule::Verbatim => ident.to_string(),
            RenameRule::PascalCase => utils::pascal_case(ident),
            RenameRule::CamelCase => utils::camel_case(ident),
            RenameRule::SnakeCase => utils::snake_case(ident),
        }
    }
}

/// Column name of a field: `column_name` wins over the `rename_all` rule
pub fn column_name(field: &Field, rule: RenameRule) -> syn::Result<String> {
    if let Some(lit) = extract_str(&field.attrs, "column_name")? {
        return Ok(lit.value());
    }
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    Ok(rule.apply(&ident.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_extract_tags_in_order() {
        let field: Field = parse_quote! {
            #[tag(db = "nullable, size=99", json = "comment")]
            #[tag(db = "-")]
            pub comment: String
        };
        let tags = extract_tags(&field).unwrap();
        assert_eq!(
            tags,
            vec![
                ("db".to_string(), "nullable, size=99".to_string()),
                ("json".to_string(), "comment".to_string()),
                ("db".to_string(), "-".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_tags_requires_string() {
        let field: Field = parse_quote! {
            #[tag(db = 5)]
            pub comment: String
        };
        assert!(extract_tags(&field).is_err());
    }

    #[test]
    fn test_column_name_override() {
        let field: Field = parse_quote! {
            #[column_name = "ID"]
            pub id: i64
        };
        assert_eq!(column_name(&field, RenameRule::PascalCase).unwrap(), "ID");
    }

    #[test]
    fn test_rename_rules() {
        let field: Field = parse_quote! { pub created_at: i64 };
        assert_eq!(column_name(&field, RenameRule::Verbatim).unwrap(), "created_at");
        assert_eq!(column_name(&field, RenameRule::PascalCase).unwrap(), "CreatedAt");
        assert_eq!(column_name(&field, RenameRule::CamelCase).unwrap(), "createdAt");

        let raw: Field = parse_quote! { pub r#type: String };
        assert_eq!(column_name(&raw, RenameRule::PascalCase).unwrap(), "Type");
    }

    #[test]
    fn test_unknown_rename_rule() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[rename_all = "kebab-case"])];
        assert!(RenameRule::from_attrs(&attrs).is_err());
    }
}
