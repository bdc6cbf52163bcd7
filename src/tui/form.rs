// Form state - labeled text fields with focus cycling and inline errors
//
// Editing is append/delete at the end of the value, which is all a terminal
// form needs here. Validation errors from the stub backend attach to a
// field by name and clear on the next edit.

use crate::backend::SubmitError;

#[derive(Debug, Clone)]
pub struct TextField {
    /// Stable name validation errors refer to ("email", "password")
    pub name: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    pub value: String,
    /// Render the value as dots (passwords)
    pub masked: bool,
}

impl TextField {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            masked: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Value as shown on screen
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<TextField>,
    pub focused: usize,
    pub error: Option<FormError>,
}

impl Form {
    pub fn new(fields: Vec<TextField>) -> Self {
        Self {
            fields,
            focused: 0,
            error: None,
        }
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Value of the field with the given name; empty if absent
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
            self.error = None;
        }
    }

    /// Whether the error (if any) belongs to this field
    pub fn field_has_error(&self, name: &str) -> bool {
        self.error.as_ref().is_some_and(|e| e.field == name)
    }

    /// Attach a submit error to the form; validation errors jump focus to
    /// the offending field
    pub fn set_error(&mut self, err: &SubmitError) {
        match err {
            SubmitError::Validation { field, message } => {
                if let Some(idx) = self.fields.iter().position(|f| f.name == *field) {
                    self.focused = idx;
                }
                self.error = Some(FormError {
                    field,
                    message: message.clone(),
                });
            }
            other => {
                self.error = Some(FormError {
                    field: "",
                    message: other.to_string(),
                });
            }
        }
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form() -> Form {
        Form::new(vec![
            TextField::new("email", "Email"),
            TextField::masked("password", "Password"),
        ])
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = login_form();
        form.insert_char('a');
        form.insert_char('@');
        form.focus_next();
        form.insert_char('x');

        assert_eq!(form.value("email"), "a@");
        assert_eq!(form.value("password"), "x");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = login_form();
        assert_eq!(form.focused, 0);
        form.focus_prev();
        assert_eq!(form.focused, 1);
        form.focus_next();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn masked_fields_hide_their_value() {
        let mut form = login_form();
        form.focus_next();
        form.insert_char('a');
        form.insert_char('b');
        assert_eq!(form.fields()[1].display_value(), "••");
    }

    #[test]
    fn validation_error_focuses_the_offending_field() {
        let mut form = login_form();
        form.focus_next();
        let err = SubmitError::validation("email", "Invalid email address");
        form.set_error(&err);

        assert_eq!(form.focused, 0);
        assert!(form.field_has_error("email"));
        assert!(!form.field_has_error("password"));
    }

    #[test]
    fn editing_clears_the_error() {
        let mut form = login_form();
        form.set_error(&SubmitError::validation("email", "Required"));
        assert!(form.error.is_some());
        form.insert_char('a');
        assert!(form.error.is_none());
    }
}
