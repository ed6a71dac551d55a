//! The generated plan screen.

use verve_core::models::tip::WellnessTip;

use crate::app::Command;

/// Shown while a plan is being generated.
pub fn render_loading() -> String {
    "\n✨ Generating Your Wellness Plan\n   AI is personalizing recommendations for you...\n"
        .to_string()
}

pub fn render(tips: &[WellnessTip], favorites_count: usize) -> String {
    let mut out = String::new();
    out.push_str("\nYour Personalized Wellness Plan\n");
    out.push_str("AI-generated recommendations tailored just for you\n\n");

    for (i, tip) in tips.iter().enumerate() {
        out.push_str(&super::tip_card(i + 1, tip));
    }

    out.push_str("\nCommands:\n");
    out.push_str(&format!("  1-{}            view a tip\n", tips.len()));
    out.push_str("  r              Generate New Tips\n");
    if favorites_count > 0 {
        out.push_str(&format!("  f              View Saved ({favorites_count})\n"));
    }
    out.push_str("  q              quit\n");
    out.push_str("\n> ");
    out
}

/// Parse one input line on the tips screen.
pub fn parse(line: &str, tip_count: usize) -> Option<Command> {
    match line {
        "r" | "regenerate" => Some(Command::Regenerate),
        "f" | "favorites" => Some(Command::ViewFavorites),
        "q" | "quit" => Some(Command::Quit),
        _ => {
            let n: usize = line.parse().ok()?;
            (1..=tip_count).contains(&n).then(|| Command::SelectTip(n - 1))
        }
    }
}
