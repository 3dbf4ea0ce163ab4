//! Field validation shared by the user form and the inline editable cell.
//!
//! Only shape is checked here. Email uniqueness is a collection-level rule and
//! lives in [`crate::UserDirectory`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::{UserDraft, UserField};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validate a single field value.
pub fn validate_field(field: UserField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if field == UserField::Email && !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Validate a whole draft, reporting the first failing field (name, then email).
pub fn validate_draft(draft: &UserDraft) -> Result<(), ValidationError> {
    validate_field(UserField::Name, &draft.name)?;
    validate_field(UserField::Email, &draft.email)
}

/// Per-field errors for a draft, for forms that show every message at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl DraftErrors {
    pub fn check(draft: &UserDraft) -> Self {
        Self {
            name: validate_field(UserField::Name, &draft.name).err(),
            email: validate_field(UserField::Email, &draft.email).err(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    pub fn clear(&mut self, field: UserField) {
        match field {
            UserField::Name => self.name = None,
            UserField::Email => self.email = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values() {
        assert!(validate_field(UserField::Name, "Ann").is_ok());
        assert!(validate_field(UserField::Email, "ann@x.com").is_ok());
        assert!(validate_field(UserField::Email, "user.name+tag@mail.example.co.uk").is_ok());
        assert!(validate_field(UserField::Email, "a@b.c").is_ok());
    }

    #[test]
    fn test_blank_name() {
        assert_eq!(
            validate_field(UserField::Name, "   "),
            Err(ValidationError::EmptyField { field: UserField::Name })
        );
    }

    #[test]
    fn test_blank_email() {
        assert_eq!(
            validate_field(UserField::Email, ""),
            Err(ValidationError::EmptyField { field: UserField::Email })
        );
    }

    #[test]
    fn test_malformed_emails() {
        for bad in ["a@b", "plainstring", "a b@x.com", "a@@x.com", "@x.com", "ann@x.", " ann@x.com"] {
            assert_eq!(
                validate_field(UserField::Email, bad),
                Err(ValidationError::InvalidFormat),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmptyField { field: UserField::Name }.to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::EmptyField { field: UserField::Email }.to_string(),
            "Email is required"
        );
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_draft_errors_reports_both_fields() {
        let errors = DraftErrors::check(&UserDraft::new("", "plainstring"));
        assert_eq!(errors.name, Some(ValidationError::EmptyField { field: UserField::Name }));
        assert_eq!(errors.email, Some(ValidationError::InvalidFormat));
        assert!(!errors.is_empty());

        assert!(DraftErrors::check(&UserDraft::new("Ann", "ann@x.com")).is_empty());
    }

    #[test]
    fn test_validate_draft_name_first() {
        assert_eq!(
            validate_draft(&UserDraft::new("", "bad")),
            Err(ValidationError::EmptyField { field: UserField::Name })
        );
    }
}
