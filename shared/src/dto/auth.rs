use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Referral code of the sponsoring member, when the signup came
    /// through a shared link.
    #[serde(rename = "referralCode", skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// OTP verification request (sent after registration)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Request a fresh OTP for a pending registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResendOtpRequest {
    pub email: String,
}

/// Start a password reset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Complete a password reset with the emailed OTP
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Authentication payload (login/registration success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthData {
    pub user: UserInfo,
    pub token: String,
}

/// Member profile as the backend reports it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "referralCode")]
    pub referral_code: String,
    /// Whether the member has completed the activation payment and has
    /// full feature access.
    #[serde(rename = "paymentVerified", default)]
    pub payment_verified: bool,
    /// Cached wallet balance in rupees; refreshed per screen view.
    #[serde(rename = "walletBalance", default)]
    pub wallet_balance: f64,
}

/// Terms and conditions document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermsDocument {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
