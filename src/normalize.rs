//! Enum token normalization.
//!
//! Turns raw enum values such as `CamelStatus`, `Module::Status` or
//! `Kebab-Status` into the snake_case fragment used as the last segment of a
//! translation key.

use std::sync::LazyLock;

use regex::Regex;

/// An uppercase run followed by a capitalized word: `HTTPServer` -> `HTTP_Server`.
static ACRONYM_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z0-9]+)([A-Z][a-z])").unwrap());

/// A lowercase letter or digit followed by an uppercase letter: `camelCase` -> `camel_Case`.
static WORD_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

const NAMESPACE_SEPARATOR: &str = "::";
const KEY_PATH_SEPARATOR: &str = "/";

/// Normalizes an enum token into a translation-key fragment.
///
/// Namespace separators become `/`, camel-case words are split with `_`,
/// dashes become `_`, and the result is lowercased. Tokens that are already
/// snake_case come back unchanged.
///
/// # Examples
///
/// ```
/// use humanize_enum::normalize::normalize_token;
///
/// assert_eq!(normalize_token("CamelStatus"), "camel_status");
/// assert_eq!(normalize_token("Module::Status"), "module/status");
/// assert_eq!(normalize_token("Kebab-Status"), "kebab_status");
/// assert_eq!(normalize_token("initial"), "initial");
/// ```
pub fn normalize_token(token: &str) -> String {
    if is_canonical(token) {
        return token.to_string();
    }

    let word = token.replace(NAMESPACE_SEPARATOR, KEY_PATH_SEPARATOR);
    let word = ACRONYM_BOUNDARY_REGEX.replace_all(&word, "${1}_${2}");
    let word = WORD_BOUNDARY_REGEX.replace_all(&word, "${1}_${2}");
    let normalized = word.replace('-', "_").to_lowercase();

    tracing::trace!(token, normalized = %normalized, "normalized enum token");
    normalized
}

/// True when the token has nothing to rewrite.
fn is_canonical(token: &str) -> bool {
    !token.contains(NAMESPACE_SEPARATOR)
        && !token.chars().any(|c| c.is_ascii_uppercase() || c == '-')
}
