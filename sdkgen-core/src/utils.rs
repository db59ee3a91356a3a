//! Shared casing helpers for code generation.
//!
//! Every helper first splits its input into lowercase words with
//! [`split_words`], so `"getDogsById"`, `"get_dogs_by_id"` and
//! `"get-dogs-by-id"` all case identically.

/// Split a string into lowercase words.
///
/// Boundaries are non-alphanumeric characters, a lowercase letter or digit
/// followed by an uppercase letter, and the last capital of an acronym
/// followed by a lowercase letter (`"HTTPServer"` → `["http", "server"]`).
/// Digits stay attached to the preceding word.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                flush(&mut words, &mut current);
            }
        }

        current.extend(c.to_lowercase());
    }
    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to camelCase (e.g., "get_dogs_by_id" -> "getDogsById")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "getDogs" -> "GET_DOGS")
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}
