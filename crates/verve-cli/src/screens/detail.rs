//! The tip detail screen.

use verve_core::models::tip::WellnessTip;

use crate::app::Command;
use crate::screens::icon_glyph;

const PRO_TIP: &str = "Consistency is key! Start with just one step today and build from there. \
     Small, sustainable changes lead to lasting results. Track your progress daily and \
     celebrate each milestone along the way.";

pub fn render(tip: &WellnessTip, is_favorite: bool) -> String {
    let mut out = String::new();
    let category = tip.category.to_string().to_uppercase();
    out.push_str(&format!(
        "\n{} {category}\n{}\n{}\n",
        icon_glyph(tip.icon),
        tip.title,
        tip.short_description,
    ));

    if let Some(explanation) = &tip.detailed_explanation {
        out.push_str("\nWhy This Matters For You\n");
        out.push_str(&format!("  {explanation}\n"));
    }

    if let Some(steps) = &tip.steps {
        out.push_str("\nStep-by-Step Action Plan\n");
        for (i, step) in steps.iter().enumerate() {
            out.push_str(&format!("  {}. {step}\n", i + 1));
        }
    }

    out.push_str("\n✨ Pro Tip\n");
    out.push_str(&format!("  {PRO_TIP}\n"));

    out.push_str("\nCommands:\n");
    if is_favorite {
        out.push_str("  s              Saved ✔ (press to remove)\n");
    } else {
        out.push_str("  s              Save Tip\n");
    }
    out.push_str("  b              Back to Tips\n");
    out.push_str("  q              quit\n");
    out.push_str("\n> ");
    out
}

/// Parse one input line on the detail screen.
pub fn parse(line: &str) -> Option<Command> {
    match line {
        "s" | "save" => Some(Command::ToggleFavorite),
        "b" | "back" => Some(Command::Back),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}
