//! The profile entry form.

use verve_core::models::profile::{Gender, Goal, UserProfile};

/// In-progress form state. Becomes a [`UserProfile`] on submit once age,
/// gender, and at least one goal are set.
#[derive(Debug, Default, Clone)]
pub struct ProfileForm {
    age: Option<u8>,
    gender: Option<Gender>,
    goals: Vec<Goal>,
}

/// An edit to the form, or a request to leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    SetAge(u8),
    SetGender(Gender),
    ToggleGoal(Goal),
    Submit,
    Quit,
}

impl ProfileForm {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetAge(age) => self.age = Some(age),
            FormAction::SetGender(gender) => self.gender = Some(gender),
            FormAction::ToggleGoal(goal) => self.toggle_goal(goal),
            FormAction::Submit | FormAction::Quit => {}
        }
    }

    /// Selecting a chosen goal unselects it; a fourth selection is ignored.
    fn toggle_goal(&mut self, goal: Goal) {
        if let Some(position) = self.goals.iter().position(|g| *g == goal) {
            self.goals.remove(position);
        } else if self.goals.len() < UserProfile::MAX_GOALS {
            self.goals.push(goal);
        }
    }

    /// The completed profile, or `None` while the form is still missing
    /// a field.
    pub fn submit(&self) -> Option<UserProfile> {
        let age = self.age?;
        let gender = self.gender?;
        UserProfile::new(age, gender, self.goals.clone()).ok()
    }
}

/// Parse one input line on the profile screen.
pub fn parse(line: &str) -> Option<FormAction> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let arg = parts.next();
    if parts.next().is_some() {
        return None;
    }
    match (head, arg) {
        ("age", Some(n)) => n
            .parse::<u8>()
            .ok()
            .filter(|n| (UserProfile::MIN_AGE..=UserProfile::MAX_AGE).contains(n))
            .map(FormAction::SetAge),
        ("gender", Some(n)) => {
            numbered(n, Gender::ALL.len()).map(|i| FormAction::SetGender(Gender::ALL[i]))
        }
        ("goal", Some(n)) => {
            numbered(n, Goal::ALL.len()).map(|i| FormAction::ToggleGoal(Goal::ALL[i]))
        }
        ("done", None) => Some(FormAction::Submit),
        ("quit" | "q", None) => Some(FormAction::Quit),
        _ => None,
    }
}

/// Map a 1-based menu number to a 0-based index, range checked.
fn numbered(arg: &str, len: usize) -> Option<usize> {
    let n: usize = arg.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

pub fn render(form: &ProfileForm) -> String {
    let mut out = String::new();
    out.push_str("\nWelcome to Your Wellness Journey\n");
    out.push_str("Let's personalize your experience\n\n");

    match form.age {
        Some(age) => out.push_str(&format!("  Age:    {age}\n")),
        None => out.push_str("  Age:    (not set)\n"),
    }
    match form.gender {
        Some(gender) => out.push_str(&format!("  Gender: {gender}\n")),
        None => out.push_str("  Gender: (not set)\n"),
    }
    out.push('\n');
    out.push_str("  Gender options:\n");
    for (i, gender) in Gender::ALL.iter().enumerate() {
        out.push_str(&format!("    [{}] {gender}\n", i + 1));
    }

    out.push_str("\nSelect Your Goals (Choose up to 3)\n");
    for (i, goal) in Goal::ALL.iter().enumerate() {
        let mark = if form.goals.contains(goal) { "x" } else { " " };
        out.push_str(&format!("  [{}] [{mark}] {goal}\n", i + 1));
    }
    out.push_str(&format!("  {}/3 goals selected\n", form.goals.len()));

    out.push_str("\nCommands:\n");
    out.push_str("  age <years>    set your age\n");
    out.push_str("  gender <1-4>   set your gender\n");
    out.push_str("  goal <1-7>     toggle a goal\n");
    out.push_str("  done           Generate My Wellness Plan\n");
    out.push_str("  quit           exit\n");
    out.push_str("\n> ");
    out
}
