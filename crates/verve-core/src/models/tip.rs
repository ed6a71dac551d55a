use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single templated wellness recommendation.
///
/// Tips are produced fresh (new ids) on every generation request; the id is
/// only stable within one batch and is the key for favoriting and removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessTip {
    pub id: Uuid,
    pub category: TipCategory,
    pub title: String,
    pub short_description: String,
    pub icon: TipIcon,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detailed_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub steps: Option<Vec<String>>,
}

impl WellnessTip {
    /// True when the tip already carries its detail view content.
    pub fn has_details(&self) -> bool {
        self.detailed_explanation.is_some() && self.steps.is_some()
    }
}

/// Fixed five-item tip category catalog. One tip per category per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Nutrition,
    Exercise,
    Sleep,
    Mental,
    Hydration,
}

impl TipCategory {
    pub const ALL: [TipCategory; 5] = [
        TipCategory::Nutrition,
        TipCategory::Exercise,
        TipCategory::Sleep,
        TipCategory::Mental,
        TipCategory::Hydration,
    ];
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TipCategory::Nutrition => "nutrition",
            TipCategory::Exercise => "exercise",
            TipCategory::Sleep => "sleep",
            TipCategory::Mental => "mental",
            TipCategory::Hydration => "hydration",
        };
        f.write_str(label)
    }
}

/// Fixed icon-name set. Unknown persisted names fall back to [`Sparkles`]
/// (`#[serde(other)]`), so records written by other versions still render.
///
/// [`Sparkles`]: TipIcon::Sparkles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipIcon {
    Apple,
    Dumbbell,
    Moon,
    Brain,
    Droplet,
    Heart,
    Move,
    Users,
    #[serde(other)]
    Sparkles,
}

impl TipIcon {
    /// Category→icon dispatch used at generation time.
    pub fn for_category(category: TipCategory) -> Self {
        match category {
            TipCategory::Nutrition => TipIcon::Apple,
            TipCategory::Exercise => TipIcon::Dumbbell,
            TipCategory::Sleep => TipIcon::Moon,
            TipCategory::Mental => TipIcon::Brain,
            TipCategory::Hydration => TipIcon::Droplet,
        }
    }
}
