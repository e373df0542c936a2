//! # Shared Utility Functions
//!
//! Display helpers used by every CQ Wealth frontend.
//!
//! ## Commission Display
//!
//! - [`display_commission_total`] - Derive the single earnings figure shown
//!   to members from the two generations of backend fields
//!
//! ## Formatting
//!
//! - [`format_referral_link`] - Build the shareable signup URL for a referral code
//! - [`mask_phone`] - Mask a phone number for display

use crate::dto::earnings::EarningsSnapshot;

/// Base URL referral links point at.
pub const REFERRAL_LINK_BASE: &str = "https://cqwealth.app/join";

/// Derive the commission total shown to the member.
///
/// The backend reports commissions two ways: the split
/// `pendingCommissions` / `totalCommissions` pair, and the legacy
/// `walletCommissionTotal` aggregate older accounts still carry. The
/// split pair wins whenever it is non-zero; the legacy aggregate is only
/// a fallback for accounts the migration never touched.
///
/// # Examples
///
/// ```rust
/// use shared::dto::earnings::EarningsSnapshot;
/// use shared::utils::display_commission_total;
///
/// let snapshot = EarningsSnapshot {
///     pending_commissions: 500.0,
///     total_commissions: 300.0,
///     wallet_commission_total: 9999.0,
///     lifetime_earnings: 0.0,
/// };
/// assert_eq!(display_commission_total(&snapshot), 800.0);
/// ```
pub fn display_commission_total(snapshot: &EarningsSnapshot) -> f64 {
    let preferred = snapshot.pending_commissions + snapshot.total_commissions;
    if preferred == 0.0 {
        snapshot.wallet_commission_total
    } else {
        preferred
    }
}

/// Build the shareable referral link for a member's code.
///
/// ```rust
/// use shared::utils::format_referral_link;
///
/// assert_eq!(
///     format_referral_link("CQ7X2M"),
///     "https://cqwealth.app/join?ref=CQ7X2M"
/// );
/// ```
pub fn format_referral_link(referral_code: &str) -> String {
    format!("{}?ref={}", REFERRAL_LINK_BASE, referral_code)
}

/// Mask a phone number for display, keeping the last `visible` digits.
///
/// Numbers shorter than `visible` are returned as-is.
pub fn mask_phone(phone: &str, visible: usize) -> String {
    let len = phone.chars().count();
    if len <= visible {
        return phone.to_string();
    }

    let masked: String = phone
        .chars()
        .enumerate()
        .map(|(i, c)| if i < len - visible { 'x' } else { c })
        .collect();
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pending: f64, confirmed: f64, legacy: f64) -> EarningsSnapshot {
        EarningsSnapshot {
            pending_commissions: pending,
            total_commissions: confirmed,
            wallet_commission_total: legacy,
            lifetime_earnings: 0.0,
        }
    }

    #[test]
    fn test_commission_total_prefers_split_fields() {
        // The legacy aggregate must never win when the split pair is non-zero
        assert_eq!(display_commission_total(&snapshot(500.0, 300.0, 9999.0)), 800.0);
        assert_eq!(display_commission_total(&snapshot(0.0, 120.0, 9999.0)), 120.0);
    }

    #[test]
    fn test_commission_total_falls_back_when_sum_is_zero() {
        assert_eq!(display_commission_total(&snapshot(0.0, 0.0, 250.0)), 250.0);
        assert_eq!(display_commission_total(&snapshot(0.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_format_referral_link() {
        assert_eq!(
            format_referral_link("CQ7X2M"),
            "https://cqwealth.app/join?ref=CQ7X2M"
        );
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("9876543210", 4), "xxxxxx3210");
        assert_eq!(mask_phone("3210", 4), "3210");
        assert_eq!(mask_phone("10", 4), "10");
    }
}
