//! Identifier transforms between the schema's external naming convention
//! and each target's internal one.

/// Convert a string to snake_case (e.g., "userId" -> "user_id").
///
/// A boundary is inserted before an uppercase letter preceded by a lowercase
/// letter or digit, and before an uppercase letter that starts a trailing
/// word inside an uppercase run ("HTTPCode" -> "http_code"). Idempotent on
/// already-snake_case input.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        for lower in c.to_lowercase() {
            result.push(lower);
        }
    }
    result.replace('-', "_")
}

/// Convert a string to camelCase (e.g., "full_name" -> "fullName").
///
/// This is the external-direction transform used for display labels. It is
/// lossy ("http_code" comes back as "httpCode", not "HTTPCode"); the schema
/// stays the source of truth for external spellings.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(&to_snake_case(s));
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "order_item" -> "OrderItem").
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to kebab-case (e.g., "OrderItem" -> "order-item").
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Naive pluralization: append "s".
///
/// Irregular plurals ("category" -> "categorys") are a documented limitation
/// shared with the system this replaces.
pub fn pluralize(s: &str) -> String {
    format!("{}s", s)
}
