// Form field validation
//
// Deliberately shallow: presence and a plausible email shape. Anything a
// real backend would enforce server-side stays out of scope.

use super::SubmitError;

pub fn validate_required(field: &'static str, value: &str) -> Result<(), SubmitError> {
    if value.trim().is_empty() {
        return Err(SubmitError::validation(field, "Required"));
    }
    Ok(())
}

/// Accepts `local@domain.tld`-shaped addresses. Not RFC-complete on purpose.
pub fn validate_email(field: &'static str, value: &str) -> Result<(), SubmitError> {
    let value = value.trim();
    validate_required(field, value)?;

    let Some((local, domain)) = value.split_once('@') else {
        return Err(SubmitError::validation(field, "Invalid email address"));
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok {
        return Err(SubmitError::validation(field, "Invalid email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "Alex").is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("email", "alex@example.com").is_ok());
        assert!(validate_email("email", "a.b+c@sub.example.org").is_ok());

        assert!(validate_email("email", "alex").is_err());
        assert!(validate_email("email", "alex@").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "alex@example").is_err());
        assert!(validate_email("email", "alex@.com").is_err());
        assert!(validate_email("email", "alex@example.com.").is_err());
    }
}
