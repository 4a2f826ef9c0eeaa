//! Glob patterns for relation file filters
//!
//! - `**` matches any sequence of characters, including `/`
//! - `*` matches any sequence of characters except `/`
//! - `?` matches exactly one character
//!
//! The translated expression must match the whole path. In [`GlobSyntax::Lax`]
//! mode (the default) literal characters are copied into the regex verbatim,
//! so `.` in a pattern matches any character and regex metacharacters keep
//! their regex meaning. [`GlobSyntax::Strict`] escapes them instead.

use regex::Regex;
use thiserror::Error;
use tracing::warn;

/// How literal characters in a glob are translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlobSyntax {
    /// Literals pass through unescaped
    #[default]
    Lax,
    /// Literals are regex-escaped
    Strict,
}

#[derive(Debug, Error)]
pub enum GlobError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    pattern: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compile a pattern using [`GlobSyntax::Lax`]
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        Self::with_syntax(pattern, GlobSyntax::Lax)
    }

    pub fn with_syntax(pattern: &str, syntax: GlobSyntax) -> Result<Self, GlobError> {
        let invalid = |source| GlobError::Invalid {
            pattern: pattern.to_string(),
            source,
        };
        // A lax body must parse on its own, or a stray `)` could close the
        // anchoring group and leave an unanchored alternative behind.
        Regex::new(&translate(pattern, syntax)).map_err(invalid)?;
        let regex = Regex::new(&glob_to_regex(pattern, syntax)).map_err(invalid)?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Translate a glob into an anchored regular expression source string.
///
/// The body is wrapped in a non-capturing group so that a lax `|` cannot
/// split the anchors between alternatives.
pub fn glob_to_regex(pattern: &str, syntax: GlobSyntax) -> String {
    format!("^(?:{})$", translate(pattern, syntax))
}

fn translate(pattern: &str, syntax: GlobSyntax) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    out.push_str(".*");
                } else {
                    out.push_str("[^/]*");
                }
            }
            '?' => out.push('.'),
            _ => match syntax {
                GlobSyntax::Lax => out.push(c),
                GlobSyntax::Strict => {
                    let mut buf = [0u8; 4];
                    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                }
            },
        }
    }

    out
}

/// Test a single path against a lax glob.
///
/// A pattern that does not translate to a valid regex never matches.
pub fn matches(path: &str, pattern: &str) -> bool {
    match GlobPattern::new(pattern) {
        Ok(glob) => glob.matches(path),
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}

/// Compile a list of patterns, dropping (and logging) the invalid ones.
pub fn compile_patterns(patterns: &[String], syntax: GlobSyntax) -> Vec<GlobPattern> {
    patterns
        .iter()
        .filter_map(|p| match GlobPattern::with_syntax(p, syntax) {
            Ok(glob) => Some(glob),
            Err(e) => {
                warn!("skipping relation pattern: {}", e);
                None
            }
        })
        .collect()
}
