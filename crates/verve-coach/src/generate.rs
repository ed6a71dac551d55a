//! Plan generation and tip elaboration.

use std::time::Duration;

use tera::{Context, Tera};
use tracing::{debug, info};
use uuid::Uuid;

use verve_core::models::profile::UserProfile;
use verve_core::models::tip::{TipIcon, WellnessTip};

use crate::context::profile_context;
use crate::error::CoachError;
use crate::templates::{self, FALLBACK_STEPS, TIPS_PER_PLAN, TipTemplate};

/// Pacing for the two generation operations.
#[derive(Debug, Clone, Copy)]
pub struct CoachConfig {
    /// Pause before a full plan is returned.
    pub plan_delay: Duration,
    /// Pause before an elaborated tip is returned.
    pub detail_delay: Duration,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            plan_delay: Duration::from_millis(1500),
            detail_delay: Duration::from_millis(800),
        }
    }
}

impl CoachConfig {
    /// Zero delays. Used by tests and the `--instant` flag.
    pub fn instant() -> Self {
        Self {
            plan_delay: Duration::ZERO,
            detail_delay: Duration::ZERO,
        }
    }
}

/// Renders wellness plans from the template catalog.
pub struct Coach {
    config: CoachConfig,
}

impl Coach {
    pub fn new(config: CoachConfig) -> Self {
        Self { config }
    }

    /// Generate a full plan: one tip per category, personalized to `profile`.
    ///
    /// Every call mints fresh tip ids, so a regenerated tip is a distinct
    /// record even when its text is identical to an earlier one.
    pub async fn generate_tips(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<WellnessTip>, CoachError> {
        tokio::time::sleep(self.config.plan_delay).await;

        let context = profile_context(profile)?;
        let mut tips = Vec::with_capacity(TIPS_PER_PLAN);
        for template in templates::all_templates() {
            tips.push(render_tip(template, &context)?);
        }
        info!(count = tips.len(), age = profile.age, "generated wellness plan");
        Ok(tips)
    }

    /// Fill in missing detail fields on a tip.
    ///
    /// A tip that already carries an explanation and steps comes back
    /// unchanged, without the delay.
    pub async fn elaborate_tip(&self, tip: &WellnessTip) -> WellnessTip {
        if tip.has_details() {
            return tip.clone();
        }
        tokio::time::sleep(self.config.detail_delay).await;

        let mut filled = tip.clone();
        if filled.detailed_explanation.is_none() {
            filled.detailed_explanation = Some(format!(
                "Detailed guidance for {} tailored to your profile.",
                filled.title
            ));
        }
        if filled.steps.is_none() {
            filled.steps = Some(FALLBACK_STEPS.iter().map(|s| s.to_string()).collect());
        }
        debug!(id = %filled.id, "elaborated tip");
        filled
    }
}

fn render_text(name: &str, content: &str, context: &Context) -> Result<String, CoachError> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, content)
        .map_err(|e| CoachError::TemplateParse(e.to_string()))?;
    Ok(tera.render(name, context)?)
}

fn render_tip(template: &TipTemplate, context: &Context) -> Result<WellnessTip, CoachError> {
    let short_description = render_text("short_description", template.short_description, context)?;
    let detailed_explanation =
        render_text("detailed_explanation", template.detailed_explanation, context)?;
    Ok(WellnessTip {
        id: Uuid::new_v4(),
        category: template.category,
        title: template.title.to_string(),
        short_description,
        icon: TipIcon::for_category(template.category),
        detailed_explanation: Some(detailed_explanation),
        steps: Some(template.steps.iter().map(|s| s.to_string()).collect()),
    })
}
