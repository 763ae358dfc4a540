// handlers/users/mod.rs - account registration and login
//
// Neither endpoint issues a token; login answers with the stored profile.

pub mod login;
pub mod register;

pub use login::login_post;
pub use register::register_post;

/// Basic email shape check: one '@', non-empty local part, dotted domain
pub fn validate_email_format(email: &str) -> Result<(), String> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() {
        return Err("Invalid email format".to_string());
    }

    let domain = parts[1];
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err("Invalid email format".to_string());
    }

    if email.chars().any(char::is_whitespace) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}
