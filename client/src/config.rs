use std::env;

/// Deployment environment for the checkout vendor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Test,
    Production,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the CQ Wealth backend.
    pub api_base_url: String,
    /// Publishable checkout key handed to the vendor SDK.
    pub checkout_key_id: String,
    /// Company display name shown in the checkout sheet.
    pub company_name: String,
    /// Logo URL shown in the checkout sheet.
    pub company_logo_url: String,
    /// Brand color applied to the checkout sheet, as a hex string.
    pub theme_color: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = env::var("CQ_API_BASE_URL")
            .unwrap_or_else(|_| "https://asmlmbackend-production.up.railway.app".to_string());

        let checkout_key_id =
            env::var("CQ_CHECKOUT_KEY_ID").unwrap_or_else(|_| "rzp_test_1DP5mmOlF5G5ag".to_string());

        let company_name = env::var("CQ_COMPANY_NAME").unwrap_or_else(|_| "CQ Wealth".to_string());

        let company_logo_url = env::var("CQ_COMPANY_LOGO_URL")
            .unwrap_or_else(|_| "https://cqwealth.app/assets/logo.png".to_string());

        let theme_color = env::var("CQ_THEME_COLOR").unwrap_or_else(|_| "#1B4DD1".to_string());

        let environment = match env::var("CQ_ENV").as_deref() {
            Ok("production") => Environment::Production,
            Ok("test") | Err(_) => Environment::Test,
            Ok(other) => return Err(format!("CQ_ENV must be 'test' or 'production', got '{other}'")),
        };

        Ok(Self {
            api_base_url,
            checkout_key_id,
            company_name,
            company_logo_url,
            theme_color,
            environment,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err("CQ_API_BASE_URL must be an http(s) URL".to_string());
        }

        if !self.checkout_key_id.starts_with("rzp_") {
            return Err("CQ_CHECKOUT_KEY_ID must be a Razorpay key id".to_string());
        }

        if self.environment == Environment::Production
            && self.checkout_key_id.starts_with("rzp_test_")
        {
            return Err("production builds must not ship a test checkout key".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            api_base_url: "https://asmlmbackend-production.up.railway.app".to_string(),
            checkout_key_id: "rzp_test_1DP5mmOlF5G5ag".to_string(),
            company_name: "CQ Wealth".to_string(),
            company_logo_url: "https://cqwealth.app/assets/logo.png".to_string(),
            theme_color: "#1B4DD1".to_string(),
            environment: Environment::Test,
        }
    }

    #[test]
    fn test_validate_accepts_test_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_test_key_in_production() {
        let mut config = base_config();
        config.environment = Environment::Production;
        assert!(config.validate().is_err());

        config.checkout_key_id = "rzp_live_0aB1cD2eF3gH4i".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = base_config();
        config.api_base_url = "asmlmbackend-production.up.railway.app".to_string();
        assert!(config.validate().is_err());
    }
}
