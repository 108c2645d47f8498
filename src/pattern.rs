//! Pattern compilation for [`TypedSequence::map_string`](crate::TypedSequence::map_string).
//!
//! A pattern is either a bare Rust `regex` or a delimited one in the
//! `/body/flags` form common to API filters. Recognized delimiters are
//! `/ # ~ ! @ % | + ; ,` and the backtick. Bracket delimiters are not
//! recognized, since `(...)` and `[...]` are meaningful bare regexes.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

const DELIMITERS: &[char] = &['/', '#', '~', '!', '@', '%', '|', '+', ';', ',', '`'];

/// Compile `pattern`, honoring delimiters and trailing modifiers.
///
/// # Examples
///
/// ```
/// use respseq::compile_pattern;
///
/// let re = compile_pattern("/^A/i").unwrap();
/// assert!(re.is_match("apple"));
///
/// let bare = compile_pattern("^a").unwrap();
/// assert!(!bare.is_match("Apple"));
/// ```
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let (body, modifiers) = split_delimited(pattern).unwrap_or((pattern, ""));

    let mut builder = RegexBuilder::new(body);
    for modifier in modifiers.chars() {
        match modifier {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'U' => builder.swap_greed(true),
            // Patterns are always Unicode-aware.
            'u' => &mut builder,
            other => {
                return Err(Error::UnknownModifier {
                    pattern: pattern.to_string(),
                    modifier: other,
                });
            }
        };
    }

    builder.build().map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Split `/body/flags` into `(body, flags)`.
///
/// Returns `None` when the pattern does not start with a recognized
/// delimiter, has no closing delimiter, or has non-letters after it.
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let delimiter = pattern.chars().next().filter(|c| DELIMITERS.contains(c))?;
    let rest = &pattern[delimiter.len_utf8()..];
    let end = rest.rfind(delimiter)?;
    let modifiers = &rest[end + delimiter.len_utf8()..];
    if !modifiers.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((&rest[..end], modifiers))
}
