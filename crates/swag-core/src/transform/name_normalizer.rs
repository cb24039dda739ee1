/// Prefix of a reference to a definition in the same document.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Turn a `$ref` into a class name.
///
/// - `#/definitions/Session` → `Session`
/// - `#/definitions/user` → `User`
/// - `Wallet` → `Wallet` (no prefix, title-cased as is)
pub fn reference_to_class_name(reference: &str) -> String {
    let name = reference
        .strip_prefix(DEFINITIONS_PREFIX)
        .unwrap_or(reference);
    title(name)
}

/// Convert a snake_case identifier into TitleCase.
///
/// Underscores are dropped and capitalize the next character; everything else
/// passes through unchanged, so `user_ID` becomes `UserID`.
pub fn snake_case_to_title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for ch in input.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            output.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            output.push(ch);
        }
    }

    output
}

/// Replace every newline sequence with a single space.
pub fn strip_newlines(input: &str) -> String {
    input.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Capitalize the first letter of every word.
pub fn title(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if at_word_start {
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
        at_word_start = is_word_separator(ch);
    }

    output
}

pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// ASCII punctuation and whitespace separate words; `_` and alphanumerics do not.
fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        return !(ch.is_ascii_alphanumeric() || ch == '_');
    }
    if ch.is_alphanumeric() {
        return false;
    }
    ch.is_whitespace()
}
