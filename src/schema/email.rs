//! Email syntax check.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Returns true when `value` is syntactically a plausible email address:
/// a local part, an `@`, and a dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
            .expect("email pattern compiles")
    });
    re.is_match(value)
}
