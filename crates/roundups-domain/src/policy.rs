//! Round-up policy configuration and partial edits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transaction::RoundUpDestination;

/// How the round-up for a purchase is derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundUpMethod {
    /// Gap to the next whole currency unit; zero for whole amounts.
    #[default]
    NearestDollar,
    /// Flat configured amount regardless of the purchase amount.
    CustomAmount,
}

impl fmt::Display for RoundUpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoundUpMethod::NearestDollar => "nearest_dollar",
            RoundUpMethod::CustomAmount => "custom_amount",
        };
        f.write_str(label)
    }
}

/// User-configurable rule set governing whether and how round-ups are
/// computed. One per user, owned by the settings store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpPolicy {
    pub is_enabled: bool,
    #[serde(rename = "roundUpMethod")]
    pub method: RoundUpMethod,
    #[serde(
        rename = "customRoundUpAmount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_amount: Option<f64>,
    pub default_destination: RoundUpDestination,
    pub minimum_round_up: f64,
    pub maximum_round_up: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<f64>,
    /// Category names excluded from round-up eligibility. Stored
    /// lower-cased; `apply` normalizes incoming entries.
    #[serde(default)]
    pub excluded_categories: Vec<String>,
}

impl Default for RoundUpPolicy {
    fn default() -> Self {
        Self {
            is_enabled: true,
            method: RoundUpMethod::NearestDollar,
            custom_amount: None,
            default_destination: RoundUpDestination::Investment,
            minimum_round_up: 0.01,
            maximum_round_up: 10.0,
            monthly_limit: None,
            excluded_categories: Vec::new(),
        }
    }
}

impl RoundUpPolicy {
    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    /// Excluded categories are lower-cased on the way in.
    pub fn apply(&mut self, patch: PolicyPatch) {
        if let Some(enabled) = patch.is_enabled {
            self.is_enabled = enabled;
        }
        if let Some(method) = patch.method {
            self.method = method;
        }
        if let Some(amount) = patch.custom_amount {
            self.custom_amount = Some(amount);
        }
        if let Some(destination) = patch.default_destination {
            self.default_destination = destination;
        }
        if let Some(minimum) = patch.minimum_round_up {
            self.minimum_round_up = minimum;
        }
        if let Some(maximum) = patch.maximum_round_up {
            self.maximum_round_up = maximum;
        }
        if let Some(limit) = patch.monthly_limit {
            self.monthly_limit = Some(limit);
        }
        if let Some(categories) = patch.excluded_categories {
            self.excluded_categories = categories
                .into_iter()
                .map(|category| category.trim().to_lowercase())
                .collect();
        }
    }

    pub fn with_patch(mut self, patch: PolicyPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial edit of a [`RoundUpPolicy`], one optional field per policy field.
/// The unit of settings updates: deserialized from a PATCH payload,
/// validated, then applied.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(
        rename = "roundUpMethod",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<RoundUpMethod>,
    #[serde(
        rename = "customRoundUpAmount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<RoundUpDestination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_round_up: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_round_up: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_categories: Option<Vec<String>>,
}

impl PolicyPatch {
    pub fn has_effect(&self) -> bool {
        self.is_enabled.is_some()
            || self.method.is_some()
            || self.custom_amount.is_some()
            || self.default_destination.is_some()
            || self.minimum_round_up.is_some()
            || self.maximum_round_up.is_some()
            || self.monthly_limit.is_some()
            || self.excluded_categories.is_some()
    }
}

/// Outcome of validating a [`PolicyPatch`]: every violated rule is reported,
/// not just the first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut policy = RoundUpPolicy::default();
        policy.apply(PolicyPatch {
            method: Some(RoundUpMethod::CustomAmount),
            custom_amount: Some(2.0),
            ..PolicyPatch::default()
        });

        assert_eq!(policy.method, RoundUpMethod::CustomAmount);
        assert_eq!(policy.custom_amount, Some(2.0));
        assert!(policy.is_enabled, "untouched field must keep its value");
        assert_eq!(policy.minimum_round_up, 0.01);
    }

    #[test]
    fn apply_lowercases_excluded_categories() {
        let mut policy = RoundUpPolicy::default();
        policy.apply(PolicyPatch {
            excluded_categories: Some(vec!["Groceries".into(), " Fuel ".into()]),
            ..PolicyPatch::default()
        });

        assert_eq!(policy.excluded_categories, vec!["groceries", "fuel"]);
    }

    #[test]
    fn patch_round_trips_host_json() {
        let raw = r#"{"roundUpMethod":"custom_amount","customRoundUpAmount":1.5}"#;
        let patch: PolicyPatch = serde_json::from_str(raw).expect("parse patch");

        assert_eq!(patch.method, Some(RoundUpMethod::CustomAmount));
        assert_eq!(patch.custom_amount, Some(1.5));
        assert!(patch.has_effect());
        assert!(patch.is_enabled.is_none());
    }

    #[test]
    fn empty_patch_has_no_effect() {
        assert!(!PolicyPatch::default().has_effect());
    }
}
