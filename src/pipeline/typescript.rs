//! Rendering of generated TypeScript string modules.
//!
//! A reference module looks like:
//!
//! ```text
//! const enStrings = {
//!     hello: "Hello {name}",
//! };
//!
//! export default enStrings;
//! ```
//!
//! Other languages import the shared type and annotate the object with it (wrapped in
//! `Partial<...>` for partial languages). Entries are indented with a tab.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind<'a> {
    /// The default language: an untyped object that defines the shape.
    Reference,
    Typed {
        types_import: &'a str,
        type_name: &'a str,
        partial: bool,
    },
}

/// Name of the exported object, e.g. `enStrings` or `zh_CNStrings`.
pub fn object_name(language: &str) -> String {
    let mut name: String = language
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name.push_str("Strings");
    name
}

/// Escape a value for a double-quoted string literal.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Object keys stay bare when they are valid identifiers, otherwise they are quoted.
pub fn format_key(key: &str) -> Cow<'_, str> {
    if IDENTIFIER_REGEX.is_match(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("\"{}\"", escape(key)))
    }
}

pub fn render_module(language: &str, kind: ModuleKind<'_>, entries: &[(String, String)]) -> String {
    let name = object_name(language);
    let mut lines = Vec::with_capacity(entries.len() + 8);

    match kind {
        ModuleKind::Reference => lines.push(format!("const {} = {{", name)),
        ModuleKind::Typed {
            types_import,
            type_name,
            partial,
        } => {
            lines.push(format!(
                "import {{ {} }} from \"{}\";",
                type_name,
                escape(types_import)
            ));
            lines.push(String::new());
            lines.push(String::new());
            let annotation = if partial {
                format!("Partial<{}>", type_name)
            } else {
                type_name.to_string()
            };
            lines.push(format!("const {}: {} = {{", name, annotation));
        }
    }

    for (key, value) in entries {
        lines.push(format!("\t{}: \"{}\",", format_key(key), escape(value)));
    }

    lines.push("};".to_string());
    lines.push(String::new());
    lines.push(format!("export default {};", name));
    lines.push(String::new());

    lines.join(NEWLINE)
}
