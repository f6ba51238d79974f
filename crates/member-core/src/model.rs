//! User and Tier Models
//!
//! Read-only views over records owned by the external API. The frontend
//! never mutates these; it re-fetches them wholesale.

use serde::{Deserialize, Serialize};

/// Sentinel plan tag meaning "no paid access"
pub const FREE_PLAN: &str = "free";

/// The current user as the API reports it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,

    /// Free-form plan tag; anything other than [`FREE_PLAN`] is a paid tier
    #[serde(default = "default_plan")]
    pub plan: String,
}

fn default_plan() -> String {
    FREE_PLAN.to_string()
}

impl User {
    /// Binary access gate: any plan other than the free sentinel is paid
    pub fn has_paid_access(&self) -> bool {
        self.plan != FREE_PLAN
    }

    /// Local part of the email, for the welcome header
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Effective plan tag; an absent user record reads as free
pub fn plan_of(user: Option<&User>) -> &str {
    user.map_or(FREE_PLAN, |u| u.plan.as_str())
}

/// Binary access gate over an optional user record
pub fn has_paid_access(user: Option<&User>) -> bool {
    plan_of(user) != FREE_PLAN
}

/// A purchasable pricing option from the external catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,

    /// Zero means the free tier
    #[serde(default)]
    pub price: f64,

    /// Opaque payment-provider price identifier
    #[serde(rename = "priceId", default)]
    pub price_id: String,
}

impl Tier {
    pub fn is_paid(&self) -> bool {
        self.price > 0.0
    }
}

/// Catalog response wrapper
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TierList {
    #[serde(default)]
    pub tiers: Vec<Tier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(plan: &str) -> User {
        User {
            email: "member@example.com".into(),
            plan: plan.into(),
        }
    }

    #[test]
    fn test_free_plan_has_no_paid_access() {
        assert!(!user("free").has_paid_access());
        assert!(!has_paid_access(Some(&user("free"))));
    }

    #[test]
    fn test_absent_user_reads_as_free() {
        assert_eq!(plan_of(None), FREE_PLAN);
        assert!(!has_paid_access(None));
    }

    #[test]
    fn test_any_other_plan_is_paid() {
        for plan in ["pro", "premium", "lifetime", "team"] {
            assert!(user(plan).has_paid_access(), "plan {plan} should be paid");
        }
    }

    #[test]
    fn test_display_name_is_email_local_part() {
        assert_eq!(user("free").display_name(), "member");
    }

    #[test]
    fn test_user_plan_defaults_to_free() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(user.plan, FREE_PLAN);
    }

    #[test]
    fn test_tier_list_deserializes_api_shape() {
        let list: TierList = serde_json::from_str(
            r#"{"tiers":[{"name":"Free","price":0,"priceId":""},
                         {"name":"Member","price":19,"priceId":"price_123"}]}"#,
        )
        .unwrap();
        assert_eq!(list.tiers.len(), 2);
        assert!(!list.tiers[0].is_paid());
        assert!(list.tiers[1].is_paid());
        assert_eq!(list.tiers[1].price_id, "price_123");
    }
}
