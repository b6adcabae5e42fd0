use crate::domain::Contact;
use crate::errors::AppError;
use regex::Regex;

pub const PHONE_PATTERN: &str = r"^\+[0-9]{7,15}$";

pub fn validate_name(name: &str) -> bool {
    // Must contain something besides whitespace
    !name.trim().is_empty()
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Leading '+' then 7 to 15 digits
    let re = Regex::new(PHONE_PATTERN)?;
    Ok(re.is_match(phone))
}

/// Checks raw input and builds a contact with a fresh id.
pub fn new_contact(first_name: &str, last_name: &str, phone: &str) -> Result<Contact, AppError> {
    check_fields(first_name, last_name, phone)?;

    Ok(Contact::new(
        first_name.trim().to_string(),
        last_name.trim().to_string(),
        phone.trim().to_string(),
    ))
}

/// Merges optional new values over `current` and checks the result.
pub fn validate_edit(
    current: &Contact,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
) -> Result<Contact, AppError> {
    let first_name = first_name.unwrap_or_else(|| current.first_name.clone());
    let last_name = last_name.unwrap_or_else(|| current.last_name.clone());
    let phone = phone.unwrap_or_else(|| current.phone.clone());

    check_fields(&first_name, &last_name, &phone)?;

    Ok(Contact {
        id: current.id,
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        phone: phone.trim().to_string(),
    })
}

fn check_fields(first_name: &str, last_name: &str, phone: &str) -> Result<(), AppError> {
    if !validate_name(first_name) {
        return Err(AppError::Validation("First name is empty".to_string()));
    }
    if !validate_name(last_name) {
        return Err(AppError::Validation("Last name is empty".to_string()));
    }
    if phone.trim().is_empty() {
        return Err(AppError::Validation("Phone is empty".to_string()));
    }
    if !validate_phone(phone.trim())? {
        return Err(AppError::Validation("Phone number is invalid".to_string()));
    }
    Ok(())
}
