use crate::errors::AppError;

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn email(email: &str) -> Result<(), AppError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if trimmed.len() > 254 {
        return Err(AppError::Validation("Email must be at most 254 characters".to_string()));
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Err(AppError::Validation(
            "Email must be a valid address (contain '@' and '.')".to_string(),
        ));
    }
    Ok(())
}

/// Validate a password: min 8 chars on signup.
pub fn password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate a required text field with a max length.
pub fn required(value: &str, field_name: &str, max_len: usize) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field_name} is required")));
    }
    if trimmed.len() > max_len {
        return Err(AppError::Validation(format!(
            "{field_name} must be at most {max_len} characters"
        )));
    }
    Ok(())
}
