//! Consistency checks for policy edits.

use roundups_domain::{PolicyPatch, RoundUpMethod, ValidationReport};

pub struct PolicyValidator;

impl PolicyValidator {
    /// Checks every rule independently and reports all violations; never
    /// fails and never panics.
    pub fn validate(patch: &PolicyPatch) -> ValidationReport {
        let mut errors = Vec::new();

        if let Some(minimum) = patch.minimum_round_up {
            if minimum < 0.0 {
                errors.push("minimum round-up amount cannot be negative".to_string());
            }
        }

        if let Some(maximum) = patch.maximum_round_up {
            if maximum <= 0.0 {
                errors.push("maximum round-up amount must be greater than 0".to_string());
            }
        }

        if let (Some(minimum), Some(maximum)) = (patch.minimum_round_up, patch.maximum_round_up) {
            if minimum > maximum {
                errors.push("minimum round-up amount cannot be greater than maximum".to_string());
            }
        }

        if patch.method == Some(RoundUpMethod::CustomAmount)
            && !patch.custom_amount.is_some_and(|amount| amount > 0.0)
        {
            errors
                .push("custom round-up amount must be specified and greater than 0".to_string());
        }

        if let Some(limit) = patch.monthly_limit {
            if limit <= 0.0 {
                errors.push("monthly limit must be greater than 0".to_string());
            }
        }

        ValidationReport::from_errors(errors)
    }
}
