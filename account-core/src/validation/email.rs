use once_cell::sync::Lazy;
use regex::Regex;

// Dot-separated atoms of letters, digits and the printable specials, then a
// dotted domain. Letters include non-ASCII ones; the final label must start
// with a letter.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+\p{L}(?:[\p{L}\p{N}-]*[\p{L}\p{N}])?$",
    )
    .expect("email regex should compile")
});

/// Syntactic e-mail check. Does not trim; surrounding whitespace fails.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
