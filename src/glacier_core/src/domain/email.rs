use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::validation_error::ValidationError;

// Lowercase only. Uppercase addresses and TLDs longer than four letters are rejected.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$").expect("email pattern is valid")
});

/// A validated email address.
///
/// The only way to obtain one is [`Email::try_from`], so holding an `Email`
/// means the address matched the accepted pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }

        if !EMAIL_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidEmailFormat);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
