//! End-to-end tests for the controller: screen transitions, persistence,
//! and command guards, against a real store in a temp directory.
//!
//! Run with: `cargo test -p verve-cli --test controller`

use tempfile::TempDir;
use verve_cli::app::{App, Command, Flow, Screen};
use verve_coach::generate::{Coach, CoachConfig};
use verve_core::models::profile::{Gender, Goal, UserProfile};
use verve_storage::store::TipStore;

fn profile() -> UserProfile {
    UserProfile::new(31, Gender::Female, vec![Goal::WeightLoss, Goal::MoreEnergy]).unwrap()
}

async fn fresh_app(dir: &TempDir) -> App {
    App::bootstrap(TipStore::new(dir.path()), Coach::new(CoachConfig::instant()))
        .await
        .unwrap()
}

/// Submit the profile and land on the tips screen.
async fn submitted_app(dir: &TempDir) -> App {
    let mut app = fresh_app(dir).await;
    app.handle(Command::SubmitProfile(profile())).await.unwrap();
    app
}

#[tokio::test]
async fn starts_on_profile_screen_without_a_record() {
    let dir = TempDir::new().unwrap();
    let app = fresh_app(&dir).await;

    assert_eq!(app.screen(), Screen::Profile);
    assert!(app.profile().is_none());
    assert!(app.tips().is_empty());
}

#[tokio::test]
async fn submit_persists_profile_and_generates_plan() {
    let dir = TempDir::new().unwrap();
    let app = submitted_app(&dir).await;

    assert_eq!(app.screen(), Screen::Tips);
    assert_eq!(app.tips().len(), 5);
    assert_eq!(TipStore::new(dir.path()).load_profile(), Some(profile()));
}

#[tokio::test]
async fn restart_resumes_on_tips_screen() {
    let dir = TempDir::new().unwrap();
    submitted_app(&dir).await;

    let resumed = fresh_app(&dir).await;
    assert_eq!(resumed.screen(), Screen::Tips);
    assert_eq!(resumed.tips().len(), 5);
    assert_eq!(resumed.profile(), Some(&profile()));
}

#[tokio::test]
async fn select_opens_detail_and_back_returns_to_tips() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;

    app.handle(Command::SelectTip(2)).await.unwrap();
    assert_eq!(app.screen(), Screen::Detail);
    assert_eq!(app.selected().unwrap().title, app.tips()[2].title);

    app.handle(Command::Back).await.unwrap();
    assert_eq!(app.screen(), Screen::Tips);
    assert!(app.selected().is_none());
}

#[tokio::test]
async fn regenerate_replaces_the_plan_with_fresh_ids() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;
    let old_ids: Vec<_> = app.tips().iter().map(|t| t.id).collect();

    app.handle(Command::Regenerate).await.unwrap();

    assert_eq!(app.screen(), Screen::Tips);
    assert_eq!(app.tips().len(), 5);
    for tip in app.tips() {
        assert!(!old_ids.contains(&tip.id), "id {} survived regeneration", tip.id);
    }
}

#[tokio::test]
async fn view_favorites_requires_a_saved_tip() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;

    app.handle(Command::ViewFavorites).await.unwrap();
    assert_eq!(app.screen(), Screen::Tips);

    app.handle(Command::SelectTip(0)).await.unwrap();
    app.handle(Command::ToggleFavorite).await.unwrap();
    app.handle(Command::Back).await.unwrap();

    app.handle(Command::ViewFavorites).await.unwrap();
    assert_eq!(app.screen(), Screen::Favorites);
}

#[tokio::test]
async fn toggle_favorite_saves_then_removes() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;
    app.handle(Command::SelectTip(1)).await.unwrap();
    let id = app.selected().unwrap().id;

    app.handle(Command::ToggleFavorite).await.unwrap();
    assert!(app.selected_is_favorite());
    assert_eq!(app.favorites().len(), 1);
    assert!(TipStore::new(dir.path()).is_favorite(id));

    app.handle(Command::ToggleFavorite).await.unwrap();
    assert!(!app.selected_is_favorite());
    assert!(app.favorites().is_empty());
    assert!(!TipStore::new(dir.path()).is_favorite(id));
}

#[tokio::test]
async fn favorites_survive_restart_without_a_profile() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = submitted_app(&dir).await;
        app.handle(Command::SelectTip(0)).await.unwrap();
        app.handle(Command::ToggleFavorite).await.unwrap();
    }
    std::fs::remove_file(dir.path().join(verve_core::store_keys::PROFILE)).unwrap();

    let resumed = fresh_app(&dir).await;
    assert_eq!(resumed.screen(), Screen::Profile);
    assert_eq!(resumed.favorites().len(), 1);
}

#[tokio::test]
async fn detail_from_favorites_still_backs_to_tips() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;
    app.handle(Command::SelectTip(0)).await.unwrap();
    app.handle(Command::ToggleFavorite).await.unwrap();
    app.handle(Command::Back).await.unwrap();
    app.handle(Command::ViewFavorites).await.unwrap();

    app.handle(Command::SelectTip(0)).await.unwrap();
    assert_eq!(app.screen(), Screen::Detail);

    app.handle(Command::Back).await.unwrap();
    assert_eq!(app.screen(), Screen::Tips);
}

#[tokio::test]
async fn remove_favorite_stays_on_favorites_screen() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;
    for index in [0, 1] {
        app.handle(Command::SelectTip(index)).await.unwrap();
        app.handle(Command::ToggleFavorite).await.unwrap();
        app.handle(Command::Back).await.unwrap();
    }
    app.handle(Command::ViewFavorites).await.unwrap();

    let first_id = app.favorites()[0].id;
    app.handle(Command::RemoveFavorite(first_id)).await.unwrap();

    assert_eq!(app.screen(), Screen::Favorites);
    assert_eq!(app.favorites().len(), 1);
    assert_ne!(app.favorites()[0].id, first_id);
}

#[tokio::test]
async fn out_of_place_commands_are_ignored() {
    let dir = TempDir::new().unwrap();
    let mut app = fresh_app(&dir).await;

    app.handle(Command::Regenerate).await.unwrap();
    app.handle(Command::Back).await.unwrap();
    app.handle(Command::ToggleFavorite).await.unwrap();
    app.handle(Command::SelectTip(0)).await.unwrap();

    assert_eq!(app.screen(), Screen::Profile);
    assert!(app.tips().is_empty());
}

#[tokio::test]
async fn select_out_of_range_keeps_the_tips_screen() {
    let dir = TempDir::new().unwrap();
    let mut app = submitted_app(&dir).await;

    app.handle(Command::SelectTip(99)).await.unwrap();

    assert_eq!(app.screen(), Screen::Tips);
    assert!(app.selected().is_none());
}

#[tokio::test]
async fn quit_exits_from_any_screen() {
    let dir = TempDir::new().unwrap();
    let mut app = fresh_app(&dir).await;
    assert_eq!(app.handle(Command::Quit).await.unwrap(), Flow::Exit);

    let mut app = submitted_app(&dir).await;
    assert_eq!(app.handle(Command::Quit).await.unwrap(), Flow::Exit);
}
