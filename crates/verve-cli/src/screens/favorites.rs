//! The saved tips screen.

use uuid::Uuid;
use verve_core::models::tip::WellnessTip;

use crate::app::Command;

pub fn render(favorites: &[WellnessTip]) -> String {
    let mut out = String::new();
    out.push_str("\nYour Saved Tips\n");

    if favorites.is_empty() {
        out.push_str("No favorites yet. Start saving tips that resonate with you!\n\n");
        out.push_str("  No Favorites Yet\n");
        out.push_str("  Browse wellness tips and save your favorites for easy access\n");
    } else {
        let noun = if favorites.len() == 1 { "tip" } else { "tips" };
        out.push_str(&format!(
            "{} {noun} saved for quick access\n\n",
            favorites.len()
        ));
        for (i, tip) in favorites.iter().enumerate() {
            out.push_str(&super::tip_card(i + 1, tip));
        }
    }

    out.push_str("\nCommands:\n");
    if !favorites.is_empty() {
        out.push_str(&format!("  1-{}            view a tip\n", favorites.len()));
        out.push_str("  x <n>          Remove from favorites\n");
    }
    out.push_str("  b              Back to Tips\n");
    out.push_str("  q              quit\n");
    out.push_str("\n> ");
    out
}

/// Parse one input line on the favorites screen. Removal is by list
/// number; the command carries the underlying tip id.
pub fn parse(line: &str, favorites: &[WellnessTip]) -> Option<Command> {
    match line {
        "b" | "back" => return Some(Command::Back),
        "q" | "quit" => return Some(Command::Quit),
        _ => {}
    }

    if let Some(arg) = line.strip_prefix("x ").or_else(|| line.strip_prefix("remove ")) {
        let id = numbered_id(arg.trim(), favorites)?;
        return Some(Command::RemoveFavorite(id));
    }

    let n: usize = line.parse().ok()?;
    (1..=favorites.len()).contains(&n).then(|| Command::SelectTip(n - 1))
}

fn numbered_id(arg: &str, favorites: &[WellnessTip]) -> Option<Uuid> {
    let n: usize = arg.parse().ok()?;
    favorites.get(n.checked_sub(1)?).map(|tip| tip.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_core::models::tip::{TipCategory, TipIcon};

    fn favorites() -> Vec<WellnessTip> {
        ["first", "second"]
            .into_iter()
            .map(|title| WellnessTip {
                id: Uuid::new_v4(),
                category: TipCategory::Mental,
                title: title.to_string(),
                short_description: "short".to_string(),
                icon: TipIcon::Brain,
                detailed_explanation: None,
                steps: None,
            })
            .collect()
    }

    #[test]
    fn parse_maps_selection_and_removal() {
        let favorites = favorites();
        assert_eq!(parse("2", &favorites), Some(Command::SelectTip(1)));
        assert_eq!(parse("3", &favorites), None);
        assert_eq!(
            parse("x 1", &favorites),
            Some(Command::RemoveFavorite(favorites[0].id))
        );
        assert_eq!(
            parse("remove 2", &favorites),
            Some(Command::RemoveFavorite(favorites[1].id))
        );
        assert_eq!(parse("x 3", &favorites), None);
        assert_eq!(parse("b", &favorites), Some(Command::Back));
    }

    #[test]
    fn render_counts_tips_with_the_right_noun() {
        let favorites = favorites();
        let screen = render(&favorites);
        assert!(screen.contains("Your Saved Tips"));
        assert!(screen.contains("2 tips saved for quick access"));

        let screen = render(&favorites[..1]);
        assert!(screen.contains("1 tip saved for quick access"));
    }

    #[test]
    fn render_shows_empty_state() {
        let screen = render(&[]);
        assert!(screen.contains("No Favorites Yet"));
        assert!(screen.contains("Start saving tips that resonate with you!"));
        assert!(!screen.contains("Remove from favorites"));
    }
}
