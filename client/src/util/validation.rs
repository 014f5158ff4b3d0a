//! Client-side form validation.
//!
//! Runs before any network call; a form with errors never issues a request.
//! Errors are keyed by field name and rendered inline under each input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{Credentials, Sweet, SweetDraft};

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";
pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_QUANTITY: &str = "quantity";

/// Inline error messages by field.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Error text for `field`, if any.
pub fn field_error(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.get(field).cloned()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// # Errors
///
/// Returns per-field messages when username or password is blank.
pub fn validate_login(form: &LoginForm) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    let username = form.username.trim();
    if username.is_empty() {
        errors.insert(FIELD_USERNAME, "Username is required".to_owned());
    }
    if form.password.is_empty() {
        errors.insert(FIELD_PASSWORD, "Password is required".to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: form.password.clone(),
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// # Errors
///
/// Returns per-field messages for missing or short username/password and for
/// a confirmation that does not equal the password.
pub fn validate_register(form: &RegisterForm) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    let username = form.username.trim();
    if username.is_empty() {
        errors.insert(FIELD_USERNAME, "Username is required".to_owned());
    } else if username.chars().count() < USERNAME_MIN_LEN {
        errors.insert(
            FIELD_USERNAME,
            format!("Username must be at least {USERNAME_MIN_LEN} characters"),
        );
    }

    if form.password.is_empty() {
        errors.insert(FIELD_PASSWORD, "Password is required".to_owned());
    } else if form.password.chars().count() < PASSWORD_MIN_LEN {
        errors.insert(
            FIELD_PASSWORD,
            format!("Password must be at least {PASSWORD_MIN_LEN} characters"),
        );
    }

    if form.confirm_password.is_empty() {
        errors.insert(FIELD_CONFIRM_PASSWORD, "Please confirm your password".to_owned());
    } else if form.confirm_password != form.password {
        errors.insert(FIELD_CONFIRM_PASSWORD, "Passwords do not match".to_owned());
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: form.password.clone(),
    })
}

/// Raw text of the add/edit item form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweetForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub image_url: String,
}

impl SweetForm {
    /// Prefill from an existing item, or blank for a new one.
    pub fn from_sweet(sweet: Option<&Sweet>) -> Self {
        let Some(sweet) = sweet else {
            return Self::default();
        };
        Self {
            name: sweet.name.clone(),
            description: sweet.description.clone(),
            price: sweet.price.to_string(),
            quantity: sweet.quantity.to_string(),
            image_url: sweet.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Validate and coerce the item form into a payload.
///
/// # Errors
///
/// Returns per-field messages for blank required fields, non-numeric or
/// negative price, and non-integer or negative quantity.
pub fn validate_sweet(form: &SweetForm) -> Result<SweetDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert(FIELD_NAME, "Name is required".to_owned());
    }
    let description = form.description.trim();
    if description.is_empty() {
        errors.insert(FIELD_DESCRIPTION, "Description is required".to_owned());
    }

    let price = match parse_price(&form.price) {
        Ok(price) => price,
        Err(message) => {
            errors.insert(FIELD_PRICE, message.to_owned());
            0.0
        }
    };
    let quantity = match parse_quantity(&form.quantity) {
        Ok(quantity) => quantity,
        Err(message) => {
            errors.insert(FIELD_QUANTITY, message.to_owned());
            0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    let image_url = form.image_url.trim();
    Ok(SweetDraft {
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        quantity,
        image_url: (!image_url.is_empty()).then(|| image_url.to_owned()),
    })
}

fn parse_price(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Price is required");
    }
    let price: f64 = raw.parse().map_err(|_| "Price must be a number")?;
    if !price.is_finite() {
        return Err("Price must be a number");
    }
    if price < 0.0 {
        return Err("Price cannot be negative");
    }
    Ok(price)
}

fn parse_quantity(raw: &str) -> Result<u32, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Quantity is required");
    }
    let quantity: i64 = raw.parse().map_err(|_| "Quantity must be a whole number")?;
    if quantity < 0 {
        return Err("Quantity cannot be negative");
    }
    u32::try_from(quantity).map_err(|_| "Quantity is too large")
}
