use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// The user-supplied demographic and goal data that parameterizes tip text.
///
/// There is exactly one current profile; resubmitting the entry form
/// overwrites it. Invariants (age in 1–119, one to three distinct goals)
/// are enforced by [`UserProfile::new`] and re-checked by
/// [`UserProfile::validate`] when a persisted record is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u8,
    pub gender: Gender,
    pub goals: Vec<Goal>,
}

impl UserProfile {
    pub const MIN_AGE: u8 = 1;
    pub const MAX_AGE: u8 = 119;
    pub const MAX_GOALS: usize = 3;

    pub fn new(age: u8, gender: Gender, goals: Vec<Goal>) -> Result<Self, CoreError> {
        let profile = Self { age, gender, goals };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the profile invariants without constructing anything.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.age < Self::MIN_AGE || self.age > Self::MAX_AGE {
            return Err(CoreError::AgeOutOfRange(self.age));
        }
        if self.goals.is_empty() {
            return Err(CoreError::NoGoals);
        }
        if self.goals.len() > Self::MAX_GOALS {
            return Err(CoreError::TooManyGoals(self.goals.len()));
        }
        for (i, goal) in self.goals.iter().enumerate() {
            if self.goals[..i].contains(goal) {
                return Err(CoreError::DuplicateGoal(goal.to_string()));
            }
        }
        Ok(())
    }

    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::for_age(self.age)
    }

    /// All goal labels joined by `", "`, as interpolated into tip text.
    pub fn goals_text(&self) -> String {
        self.goals
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The first goal's label, or `"wellness"` for a goal-less record.
    ///
    /// The fallback can only fire for records that bypassed validation
    /// (e.g. hand-edited storage); templates still render sensibly then.
    pub fn primary_goal_text(&self) -> String {
        self.goals
            .first()
            .map(|g| g.to_string())
            .unwrap_or_else(|| "wellness".to_string())
    }
}

/// Fixed gender label set from the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        };
        f.write_str(label)
    }
}

/// Fixed seven-item goal catalog, in entry-form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "Better Sleep")]
    BetterSleep,
    #[serde(rename = "Stress Relief")]
    StressRelief,
    #[serde(rename = "More Energy")]
    MoreEnergy,
    #[serde(rename = "Mental Clarity")]
    MentalClarity,
    #[serde(rename = "Overall Wellness")]
    OverallWellness,
}

impl Goal {
    pub const ALL: [Goal; 7] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::BetterSleep,
        Goal::StressRelief,
        Goal::MoreEnergy,
        Goal::MentalClarity,
        Goal::OverallWellness,
    ];
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::BetterSleep => "Better Sleep",
            Goal::StressRelief => "Stress Relief",
            Goal::MoreEnergy => "More Energy",
            Goal::MentalClarity => "Mental Clarity",
            Goal::OverallWellness => "Overall Wellness",
        };
        f.write_str(label)
    }
}

/// Age bucket used for phrasing only — it has no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    YoungAdult,
    MiddleAged,
    Senior,
}

impl AgeGroup {
    pub fn for_age(age: u8) -> Self {
        if age < 30 {
            AgeGroup::YoungAdult
        } else if age < 50 {
            AgeGroup::MiddleAged
        } else {
            AgeGroup::Senior
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeGroup::YoungAdult => "young adult",
            AgeGroup::MiddleAged => "middle-aged adult",
            AgeGroup::Senior => "senior",
        };
        f.write_str(label)
    }
}
