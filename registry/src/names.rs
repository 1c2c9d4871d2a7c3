//! Identifier checks for type, field and case names.

use regex_lite::Regex;
use std::sync::OnceLock;

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Scalar and pseudo-type keywords; these can never name a registered type.
pub(crate) const RESERVED_TYPE_NAMES: &[&str] = &[
    "int", "float", "string", "bool", "array", "object", "mixed", "null",
];

static IDENTIFIER: OnceLock<Result<Regex, regex_lite::Error>> = OnceLock::new();

/// Check whether `name` is a valid identifier.
///
/// Fails only if the identifier pattern itself cannot be compiled.
pub(crate) fn is_identifier(name: &str) -> Result<bool, String> {
    IDENTIFIER
        .get_or_init(|| Regex::new(IDENTIFIER_PATTERN))
        .as_ref()
        .map(|re| re.is_match(name))
        .map_err(|e| e.to_string())
}

/// Returns true if `name` is a scalar or pseudo-type keyword.
pub(crate) fn is_reserved(name: &str) -> bool {
    RESERVED_TYPE_NAMES
        .iter()
        .any(|kw| kw.eq_ignore_ascii_case(name))
}
