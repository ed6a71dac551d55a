use std::io::Write;
use std::path::PathBuf;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use verve_cli::app::{App, Command, Flow, Screen};
use verve_cli::config;
use verve_cli::screens;
use verve_cli::screens::profile::{FormAction, ProfileForm};
use verve_coach::generate::{Coach, CoachConfig};
use verve_storage::store::TipStore;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let data_dir =
        config::resolve_data_dir(matches.get_one::<String>("data-dir").map(PathBuf::from))?;
    if matches.get_flag("reset") {
        config::reset_data(&data_dir)?;
    }

    let coach_config = if matches.get_flag("instant") {
        CoachConfig::instant()
    } else {
        CoachConfig::default()
    };

    let store = TipStore::new(&data_dir);
    if store.load_profile().is_some() {
        println!("{}", screens::tips::render_loading());
    }
    let mut app = App::bootstrap(store, Coach::new(coach_config)).await?;

    run(&mut app).await
}

fn build_cli() -> clap::Command {
    clap::Command::new("verve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personalized wellness tips in your terminal")
        .arg(
            clap::Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory for the profile and favorites records"),
        )
        .arg(
            clap::Arg::new("instant")
                .long("instant")
                .action(clap::ArgAction::SetTrue)
                .help("Skip the simulated generation delays"),
        )
        .arg(
            clap::Arg::new("reset")
                .long("reset")
                .action(clap::ArgAction::SetTrue)
                .help("Delete stored records before starting"),
        )
}

/// The read-render loop. Ends on `quit` or end of input.
async fn run(app: &mut App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut form = ProfileForm::default();

    loop {
        print!("{}", render(app, &form));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = translate(app, &mut form, line) else {
            continue;
        };

        if matches!(command, Command::SubmitProfile(_) | Command::Regenerate) {
            println!("{}", screens::tips::render_loading());
        }

        match app.handle(command).await? {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }

    Ok(())
}

/// Map one input line to a command for the current screen. Form edits are
/// applied directly; `None` reprints the screen.
fn translate(app: &App, form: &mut ProfileForm, line: &str) -> Option<Command> {
    match app.screen() {
        Screen::Profile => match screens::profile::parse(line) {
            Some(FormAction::Quit) => Some(Command::Quit),
            Some(FormAction::Submit) => match form.submit() {
                Some(profile) => Some(Command::SubmitProfile(profile)),
                None => {
                    println!("Set your age, gender, and at least one goal first.");
                    None
                }
            },
            Some(action) => {
                form.apply(action);
                None
            }
            None => None,
        },
        Screen::Tips => screens::tips::parse(line, app.tips().len()),
        Screen::Detail => screens::detail::parse(line),
        Screen::Favorites => screens::favorites::parse(line, app.favorites()),
    }
}

/// Render the current screen.
fn render(app: &App, form: &ProfileForm) -> String {
    match app.screen() {
        Screen::Profile => screens::profile::render(form),
        Screen::Tips => screens::tips::render(app.tips(), app.favorites().len()),
        Screen::Detail => match app.selected() {
            Some(tip) => screens::detail::render(tip, app.selected_is_favorite()),
            None => String::new(),
        },
        Screen::Favorites => screens::favorites::render(app.favorites()),
    }
}
