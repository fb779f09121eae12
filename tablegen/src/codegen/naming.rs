//! Naming utilities for code generation

use heck::ToSnakeCase;

/// Convert a snake_case database identifier to an exported identifier
///
/// `id` (in any casing) becomes `ID`; anything else is split on `_` and each
/// segment gets its first letter upcased, e.g. `create_time` -> `CreateTime`.
pub fn to_identifier(raw: &str) -> String {
    if raw.eq_ignore_ascii_case("id") {
        return raw.to_uppercase();
    }
    raw.split('_').map(capitalize).collect()
}

/// Convert a snake_case column name to its serialization key (camelCase)
///
/// e.g. `create_time` -> `createTime`, `ID` -> `id`
pub fn to_tag_name(raw: &str) -> String {
    let mut segments = raw.split('_');
    let mut tag = segments.next().unwrap_or_default().to_lowercase();
    for segment in segments {
        tag.push_str(&capitalize(segment));
    }
    tag
}

/// Upcase the first character, leave the rest alone
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    matches!(
        name,
        "as" | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "try"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
    )
}

/// Rust field identifier for a normalized name: snake_case, keywords escaped
///
/// e.g. `CreateTime` -> `create_time`, `ID` -> `id`, `Type` -> `r#type`
pub fn field_ident(name: &str) -> String {
    let snake = name.to_snake_case();
    if is_rust_keyword(&snake) {
        // `self`, `super`, `crate` and `Self` cannot be raw identifiers
        match snake.as_str() {
            "self" | "super" | "crate" => format!("{}_", snake),
            _ => format!("r#{}", snake),
        }
    } else {
        snake
    }
}
