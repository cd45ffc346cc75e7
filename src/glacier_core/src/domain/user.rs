use super::{email::Email, user_id::UserId, validation_error::ValidationError};

/// A user record.
///
/// A `User` is always valid: [`User::new`] is the only constructor and it
/// rejects empty fields and malformed emails. Before persistence the
/// identifier is `None`; the storage layer assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: Email,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }

        let email = Email::try_from(email.into())?;

        Ok(Self {
            id: None,
            name,
            email,
        })
    }

    /// Attach the identifier assigned by storage.
    pub fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
