//! Terminal screen rendering and input parsing.
//!
//! Each screen module exposes a stateless `render` returning the full
//! screen text and a `parse` mapping one input line to a [`Command`]
//! (or a form action, on the profile screen). The host loop owns the
//! read-render cycle.

use verve_core::models::tip::{TipIcon, WellnessTip};

pub mod detail;
pub mod favorites;
pub mod profile;
pub mod tips;

/// Terminal glyph for a tip icon.
pub fn icon_glyph(icon: TipIcon) -> &'static str {
    match icon {
        TipIcon::Apple => "🍎",
        TipIcon::Dumbbell => "🏋",
        TipIcon::Moon => "🌙",
        TipIcon::Brain => "🧠",
        TipIcon::Droplet => "💧",
        TipIcon::Heart => "❤",
        TipIcon::Move => "🏃",
        TipIcon::Users => "👥",
        TipIcon::Sparkles => "✨",
    }
}

/// One numbered tip card, as shown on the tips and favorites lists.
fn tip_card(number: usize, tip: &WellnessTip) -> String {
    format!(
        "  [{number}] {} {}  ({})\n      {}\n",
        icon_glyph(tip.icon),
        tip.title,
        tip.category,
        tip.short_description,
    )
}
