//! Attribute parsing for the Columns derive macro.
//!
//! Handles struct-level and field-level `#[sqlg(...)]` attributes.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase,
};
use syn::{Attribute, LitStr, Result};

/// What to do with fields that carry neither `column` nor `expr`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum Untagged {
    Include,
    Skip,
}

/// Field-name case conversion for untagged fields.
#[derive(Clone, Copy)]
pub(super) enum RenameAll {
    Lower,
    Upper,
    Snake,
    Camel,
    Pascal,
    ScreamingSnake,
    Kebab,
}

impl RenameAll {
    fn parse(lit: &LitStr) -> Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => RenameAll::Lower,
            "UPPERCASE" => RenameAll::Upper,
            "snake_case" => RenameAll::Snake,
            "camelCase" => RenameAll::Camel,
            "PascalCase" => RenameAll::Pascal,
            "SCREAMING_SNAKE_CASE" => RenameAll::ScreamingSnake,
            "kebab-case" => RenameAll::Kebab,
            other => {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("unknown rename_all rule `{other}`"),
                ));
            }
        })
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            RenameAll::Lower => name.to_lowercase(),
            RenameAll::Upper => name.to_uppercase(),
            RenameAll::Snake => name.to_snake_case(),
            RenameAll::Camel => name.to_lower_camel_case(),
            RenameAll::Pascal => name.to_upper_camel_case(),
            RenameAll::ScreamingSnake => name.to_shouty_snake_case(),
            RenameAll::Kebab => name.to_kebab_case(),
        }
    }
}

/// Struct-level `#[sqlg(untagged = "...", rename_all = "...")]`.
pub(super) struct StructAttr {
    pub untagged: Untagged,
    pub rename_all: Option<RenameAll>,
}

impl StructAttr {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut out = StructAttr {
            untagged: Untagged::Include,
            rename_all: None,
        };
        for attr in attrs.iter().filter(|a| a.path().is_ident("sqlg")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("untagged") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.untagged = match lit.value().as_str() {
                        "include" => Untagged::Include,
                        "skip" => Untagged::Skip,
                        _ => {
                            return Err(syn::Error::new_spanned(
                                &lit,
                                "expected `untagged = \"include\"` or `untagged = \"skip\"`",
                            ));
                        }
                    };
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = Some(RenameAll::parse(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unknown sqlg attribute, expected `untagged` or `rename_all`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Field-level `#[sqlg(column = "...", expr = "...", skip)]`.
#[derive(Default)]
pub(super) struct FieldAttr {
    pub column: Option<String>,
    pub expr: Option<String>,
    pub skip: bool,
}

impl FieldAttr {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut out = FieldAttr::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("sqlg")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else if meta.path.is_ident("column") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(&lit, "column name can not be empty"));
                    }
                    out.column = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("expr") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(&lit, "expr can not be empty"));
                    }
                    out.expr = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown sqlg attribute, expected `column`, `expr` or `skip`"))
                }
            })?;
        }
        Ok(out)
    }

    /// Whether the field names its column explicitly.
    pub fn is_tagged(&self) -> bool {
        self.column.is_some() || self.expr.is_some()
    }
}
