use crate::foundation::error::{StageError, StageResult};

/// Local-only contact form state.
///
/// There is no network submission and nothing persists: a fresh instance is
/// what a page reload produces. The only validation is required-field
/// presence, matching what the inputs themselves enforce.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitted: bool,
}

impl ContactForm {
    /// An empty, unsubmitted form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the name field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Update the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Update the message field.
    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    /// Current name field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current email field.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current message field.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the acknowledgment view is showing.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    /// Submit locally: always succeeds once every required field is present.
    pub fn submit(&mut self) -> StageResult<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(StageError::validation(format!(
                "required fields missing: {}",
                missing.join(", ")
            )));
        }
        self.submitted = true;
        Ok(())
    }

    /// Clear all fields and the submitted flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
