//! Template context built from a user profile.

use serde::Serialize;
use tera::Context;

use verve_core::models::profile::UserProfile;

use crate::error::CoachError;

/// The variables every tip template may reference.
#[derive(Debug, Serialize)]
struct ProfileVars {
    age: u8,
    age_group: String,
    gender: String,
    goals: String,
    primary_goal: String,
}

/// Build a Tera context from a profile.
///
/// The profile fields become the template variables via serde_json, the
/// derived text fields (`age_group`, `goals`, `primary_goal`) included.
pub fn profile_context(profile: &UserProfile) -> Result<Context, CoachError> {
    let vars = ProfileVars {
        age: profile.age,
        age_group: profile.age_group().to_string(),
        gender: profile.gender.to_string(),
        goals: profile.goals_text(),
        primary_goal: profile.primary_goal_text(),
    };
    let value = serde_json::to_value(&vars)?;
    Context::from_value(value).map_err(|e| CoachError::TemplateRender(e.to_string()))
}
