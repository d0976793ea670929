//! Validation and parsing of individual answers.
//!
//! These functions are pure so the prompter's retry policies can be tested
//! without a terminal. Anything rejected here is reported to the user and
//! asked again; none of it aborts a session.

use crate::error::{Error, Result};

/// How a service obtains its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMethod {
    /// Pull a prebuilt image.
    Image,
    /// Build from a local context directory.
    Build,
}

/// Splits a comma-separated answer, trimming items and dropping blanks.
///
/// # Examples
///
/// ```
/// use composegen::input::split_list;
///
/// assert_eq!(split_list("a, , b ,"), ["a", "b"]);
/// assert!(split_list("   ").is_empty());
/// ```
#[must_use]
pub fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns true if `text` is a non-empty run of ASCII digits.
///
/// # Examples
///
/// ```
/// use composegen::input::is_port;
///
/// assert!(is_port("8080"));
/// assert!(!is_port(""));
/// assert!(!is_port("80a"));
/// ```
#[must_use]
pub fn is_port(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a `KEY=VALUE` pair, splitting on the first `=` only.
///
/// Both halves are trimmed. The value may be empty or contain further `=`.
///
/// # Errors
///
/// Returns a validation error if there is no `=` or the key is empty.
///
/// # Examples
///
/// ```
/// use composegen::input::parse_key_value;
///
/// let (key, value) = parse_key_value("A=B=C").unwrap();
/// assert_eq!((key.as_str(), value.as_str()), ("A", "B=C"));
/// assert!(parse_key_value("NOVALUE").is_err());
/// ```
pub fn parse_key_value(line: &str) -> Result<(String, String)> {
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| Error::validation("environment", "invalid format, use KEY=VALUE"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::validation(
            "environment",
            "variable name must be non-empty",
        ));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

/// Checks a `host:container` mapping and returns it unchanged.
///
/// # Errors
///
/// Returns a validation error if the line has no `:`.
///
/// # Examples
///
/// ```
/// use composegen::input::parse_path_pair;
///
/// assert_eq!(parse_path_pair("./data:/var/lib/data").unwrap(), "./data:/var/lib/data");
/// assert!(parse_path_pair("/only/host").is_err());
/// ```
pub fn parse_path_pair(line: &str) -> Result<String> {
    if line.contains(':') {
        Ok(line.to_string())
    } else {
        Err(Error::validation(
            "volume",
            "invalid format, use /host/path:/container/path",
        ))
    }
}

/// Maps a menu answer to a source method. Only exactly `1` or `2` match.
#[must_use]
pub fn parse_method(choice: &str) -> Option<SourceMethod> {
    match choice {
        "1" => Some(SourceMethod::Image),
        "2" => Some(SourceMethod::Build),
        _ => None,
    }
}

/// Interprets a yes/no answer (case-insensitive `y`, `yes`, `n`, `no`).
#[must_use]
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod proptests;
