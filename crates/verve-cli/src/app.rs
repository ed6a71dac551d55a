//! The application state machine.
//!
//! One screen is active at a time; every user action becomes a [`Command`]
//! and is handled to completion before the next one is read. That serial
//! discipline is what makes regeneration safe: a new plan can never be
//! overwritten by a stale in-flight one.

use tracing::{debug, info};
use uuid::Uuid;

use verve_coach::generate::Coach;
use verve_core::models::profile::UserProfile;
use verve_core::models::tip::WellnessTip;
use verve_storage::store::TipStore;

/// The four screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Profile,
    Tips,
    Detail,
    Favorites,
}

/// Everything a user can ask the app to do.
///
/// `SelectTip` carries an index into whichever list the current screen
/// shows: the plan on the tips screen, the saved list on favorites.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SubmitProfile(UserProfile),
    SelectTip(usize),
    Regenerate,
    ToggleFavorite,
    ViewFavorites,
    RemoveFavorite(Uuid),
    Back,
    Quit,
}

/// Whether the host loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App {
    store: TipStore,
    coach: Coach,
    screen: Screen,
    profile: Option<UserProfile>,
    tips: Vec<WellnessTip>,
    selected: Option<WellnessTip>,
    favorites: Vec<WellnessTip>,
}

impl App {
    /// Load persisted state and, when a profile is already stored, generate
    /// the plan straight away so the session resumes on the tips screen.
    pub async fn bootstrap(store: TipStore, coach: Coach) -> eyre::Result<Self> {
        let favorites = store.load_favorites();
        let profile = store.load_profile();
        let mut app = Self {
            store,
            coach,
            screen: Screen::Profile,
            profile,
            tips: Vec::new(),
            selected: None,
            favorites,
        };
        info!(
            favorites = app.favorites.len(),
            resumed = app.profile.is_some(),
            "app started"
        );
        if app.profile.is_some() {
            app.generate_plan().await?;
        }
        Ok(app)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn tips(&self) -> &[WellnessTip] {
        &self.tips
    }

    pub fn selected(&self) -> Option<&WellnessTip> {
        self.selected.as_ref()
    }

    pub fn favorites(&self) -> &[WellnessTip] {
        &self.favorites
    }

    /// Whether the tip open on the detail screen is currently saved.
    pub fn selected_is_favorite(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|tip| self.favorites.iter().any(|f| f.id == tip.id))
    }

    /// Apply one command. Commands that do not apply to the current screen
    /// are ignored.
    pub async fn handle(&mut self, command: Command) -> eyre::Result<Flow> {
        match (self.screen, command) {
            (_, Command::Quit) => return Ok(Flow::Exit),

            (Screen::Profile, Command::SubmitProfile(profile)) => {
                self.store.save_profile(&profile)?;
                self.profile = Some(profile);
                self.generate_plan().await?;
            }

            (Screen::Tips, Command::SelectTip(index)) => {
                if let Some(tip) = self.tips.get(index).cloned() {
                    self.open_detail(tip).await;
                }
            }
            (Screen::Tips, Command::Regenerate) => {
                self.generate_plan().await?;
            }
            (Screen::Tips, Command::ViewFavorites) => {
                if !self.favorites.is_empty() {
                    self.screen = Screen::Favorites;
                }
            }

            (Screen::Detail, Command::ToggleFavorite) => {
                if let Some(tip) = &self.selected {
                    if self.store.is_favorite(tip.id) {
                        self.store.remove_favorite(tip.id)?;
                    } else {
                        self.store.add_favorite(tip)?;
                    }
                    self.favorites = self.store.load_favorites();
                }
            }
            (Screen::Detail, Command::Back) => {
                self.back_to_tips();
            }

            (Screen::Favorites, Command::SelectTip(index)) => {
                if let Some(tip) = self.favorites.get(index).cloned() {
                    self.open_detail(tip).await;
                }
            }
            (Screen::Favorites, Command::RemoveFavorite(id)) => {
                self.store.remove_favorite(id)?;
                self.favorites = self.store.load_favorites();
            }
            (Screen::Favorites, Command::Back) => {
                self.back_to_tips();
            }

            (screen, command) => {
                debug!(?screen, ?command, "command does not apply to screen");
            }
        }
        Ok(Flow::Continue)
    }

    /// Generate a fresh plan for the current profile and show the tips
    /// screen. Without a profile this is a no-op.
    async fn generate_plan(&mut self) -> eyre::Result<()> {
        let Some(profile) = &self.profile else {
            return Ok(());
        };
        let tips = self.coach.generate_tips(profile).await?;
        self.tips = tips;
        self.selected = None;
        self.screen = Screen::Tips;
        Ok(())
    }

    /// Open a tip on the detail screen, filling in missing detail fields
    /// first. The filled-in version exists only in the selection; the
    /// source list keeps its original record.
    async fn open_detail(&mut self, tip: WellnessTip) {
        let tip = self.coach.elaborate_tip(&tip).await;
        self.selected = Some(tip);
        self.screen = Screen::Detail;
    }

    // Leaving detail or favorites always lands on tips, regardless of
    // where the tip was opened from.
    fn back_to_tips(&mut self) {
        self.screen = Screen::Tips;
        self.selected = None;
    }
}
