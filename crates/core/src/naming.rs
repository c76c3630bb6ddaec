//! Table-name normalization for the screen registration form.
//!
//! Registrars paste screen names as `CamelCase` identifiers or source file
//! names; the catalog stores upper `SNAKE_CASE` table names.

/// Source-file extensions stripped before normalization.
const SOURCE_EXTENSIONS: [&str; 4] = [".jsx", ".tsx", ".js", ".ts"];

/// Normalize a pasted screen name to the catalog's table-name convention.
///
/// - `"ContasPagar"` → `"CONTAS_PAGAR"`
/// - `"XMLParser"` → `"XML_PARSER"` (acronyms split before their last capital)
/// - `"contas_pagar.jsx"` → `"CONTAS_PAGAR"`
/// - names already in snake case are only uppercased
///
/// Returns an empty string for blank input; callers validate that separately.
pub fn table_name_key(raw: &str) -> String {
    let mut cleaned = raw.trim();
    for ext in SOURCE_EXTENSIONS {
        if let Some(stripped) = strip_suffix_ci(cleaned, ext) {
            cleaned = stripped;
            break;
        }
    }
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return String::new();
    }

    // Already snake case: just uppercase.
    if cleaned.contains('_') {
        return cleaned.to_uppercase();
    }

    let chars: Vec<char> = cleaned.chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // Boundary after a lowercase/digit ("ContasPagar"), or between an
            // acronym and the next word ("XMLParser" -> XML_PARSER).
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c);
    }

    out.to_uppercase()
}

/// Case-insensitive containment, used for the catalog's client-side search.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn strip_suffix_ci<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    if value.len() >= suffix.len() {
        let (head, tail) = value.split_at(value.len() - suffix.len());
        if tail.eq_ignore_ascii_case(suffix) {
            return Some(head);
        }
    }
    None
}
