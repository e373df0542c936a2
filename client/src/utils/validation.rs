/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Minimum withdrawal per payout method, in rupees.
pub fn minimum_withdrawal(method: &str) -> f64 {
    match method {
        "upi" => 100.0,
        _ => 500.0,
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate an Indian mobile number (10 digits, optional +91 prefix)
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = phone.strip_prefix("+91").unwrap_or(phone);
    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number must be 10 digits");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    ValidationResult::ok()
}

/// Validate that the confirmation matches the password
pub fn validate_password_match(password: &str, confirm: &str) -> ValidationResult {
    if password != confirm {
        return ValidationResult::err("Passwords don't match");
    }

    ValidationResult::ok()
}

/// Validate the shape of a referral code. Codes are issued server-side;
/// this only rejects obvious typos before the network round trip.
pub fn validate_referral_code(code: &str) -> ValidationResult {
    if code.is_empty() {
        // The field is optional at signup.
        return ValidationResult::ok();
    }

    if code.len() < 4 || code.len() > 12 {
        return ValidationResult::err("Referral code must be 4-12 characters");
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ValidationResult::err("Referral code can only contain letters and numbers");
    }

    ValidationResult::ok()
}

/// Validate a withdrawal amount against the per-method minimum
pub fn validate_withdrawal_amount(amount: f64, method: &str) -> ValidationResult {
    if !amount.is_finite() || amount <= 0.0 {
        return ValidationResult::err("Enter a valid amount");
    }

    let minimum = minimum_withdrawal(method);
    if amount < minimum {
        return ValidationResult::err(format!(
            "Minimum withdrawal for this method is \u{20b9}{minimum:.0}"
        ));
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("asha@example.com").is_valid);
        assert!(validate_email("user@domain.co.in").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("asha@").is_valid);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("9876543210").is_valid);
        assert!(validate_phone("+919876543210").is_valid);
        assert!(!validate_phone("").is_valid);
        assert!(!validate_phone("98765").is_valid);
        assert!(!validate_phone("98765432ab").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret1").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(validate_password_match("secret1", "secret1").is_valid);
        assert!(!validate_password_match("secret1", "secret2").is_valid);
    }

    #[test]
    fn test_referral_code_validation() {
        assert!(validate_referral_code("").is_valid); // optional
        assert!(validate_referral_code("CQ7X2M").is_valid);
        assert!(!validate_referral_code("ab").is_valid);
        assert!(!validate_referral_code("has spaces!").is_valid);
    }

    #[test]
    fn test_withdrawal_minimums() {
        assert!(validate_withdrawal_amount(100.0, "upi").is_valid);
        assert!(!validate_withdrawal_amount(99.0, "upi").is_valid);
        assert!(validate_withdrawal_amount(500.0, "bank_transfer").is_valid);
        assert!(!validate_withdrawal_amount(499.0, "bank_transfer").is_valid);
        assert!(!validate_withdrawal_amount(0.0, "upi").is_valid);
        assert!(!validate_withdrawal_amount(f64::NAN, "upi").is_valid);
    }
}
