//! Literal `{{KEY}}` placeholder substitution.

use super::Substitutions;

/// Replace every `{{KEY}}` token with its configured value.
///
/// Replacement is literal and global. Placeholders without a matching key
/// are left verbatim; strict validation is the caller's concern.
pub fn render(template: &str, vars: &Substitutions) -> String {
    let mut output = template.to_string();
    for (key, value) in vars.iter() {
        let token = format!("{{{{{key}}}}}");
        output = output.replace(&token, value);
    }
    output
}

/// Scan rendered text for remaining well-formed `{{IDENT}}` tokens.
///
/// An identifier is one or more ASCII alphanumerics or underscores.
/// Returns a sorted, deduplicated list of identifiers.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(start) = text[pos..].find("{{").map(|i| pos + i) {
        let ident_start = start + 2;
        let mut end = ident_start;
        while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
            end += 1;
        }
        if end > ident_start && bytes[end..].starts_with(b"}}") {
            found.push(text[ident_start..end].to_string());
            pos = end + 2;
        } else {
            pos = ident_start;
        }
    }

    found.sort();
    found.dedup();
    found
}
