//! Title bar layout preview - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use titlebar::config::ResolvedConfig;
use titlebar::model::{AppError, DecorButton, DecorButtonKind, RenderMode, VisualState, WindowInfo};
use titlebar::report::LayoutReport;
use titlebar::shell::{EventLog, MainLoop, ShellContext, StatusArea};
use titlebar::state::TitleBar;
use titlebar::view_state::CellMeasure;
use tracing::info;

/// Title bar layout preview - run one reconciliation pass and dump the geometry
#[derive(Parser, Debug)]
#[command(name = "titlebar")]
#[command(version)]
#[command(about = "Compute title bar element geometry for a given shell state")]
pub struct Args {
    /// Screen width in pixels
    #[arg(short, long, default_value = "800", value_parser = clap::value_parser!(i32).range(0..))]
    pub width: i32,

    /// Shell render mode
    #[arg(short, long, value_enum, default_value_t = RenderMode::Home)]
    pub mode: RenderMode,

    /// Width of a visible status area
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
    pub status_width: Option<i32>,

    /// Window title (loading title in loading modes)
    #[arg(short, long)]
    pub title: Option<String>,

    /// The application is busy
    #[arg(long)]
    pub waiting: bool,

    /// The window decoration has a close button
    #[arg(long)]
    pub close: bool,

    /// The window decoration has a back button
    #[arg(long)]
    pub back: bool,

    /// Use small (portrait) buttons
    #[arg(long)]
    pub small_buttons: bool,

    /// Lift the foreground group above other overlays
    #[arg(long)]
    pub foreground: bool,

    /// Extra visual state flags, e.g. BTN_SWITCHER,FULL_WIDTH
    #[arg(long, value_delimiter = ',')]
    pub state: Vec<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse flag names as printed by `VisualState`'s `Display`, case-insensitively.
fn parse_state(names: &[String]) -> Result<VisualState, AppError> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .try_fold(VisualState::empty(), |acc, name| {
            VisualState::from_name(&name.to_ascii_uppercase())
                .map(|flag| acc | flag)
                .ok_or_else(|| AppError::UnknownFlag(name.to_string()))
        })
}

fn requested_state(args: &Args) -> Result<VisualState, AppError> {
    Ok(parse_state(&args.state)?
        .with(VisualState::SMALL_BUTTONS, args.small_buttons)
        .with(VisualState::FOREGROUND, args.foreground))
}

fn shell_context(args: &Args) -> ShellContext {
    let mut ctx = ShellContext::new(args.width, args.mode);
    ctx.status_area = args.status_width.map(|width| StatusArea {
        width,
        visible: true,
    });

    if args.mode.is_app() {
        let mut buttons = Vec::new();
        if args.close {
            buttons.push(DecorButton::new(DecorButtonKind::Close));
        }
        if args.back {
            buttons.push(DecorButton::new(DecorButtonKind::Back));
        }
        let mut window = WindowInfo::decorated(args.title.as_deref().unwrap_or_default(), buttons);
        window.waiting = args.waiting;
        ctx.window = Some(window);
    }
    ctx
}

/// Build a bar from the arguments and run one synchronous pass.
fn preview(args: &Args, config: &ResolvedConfig) -> Result<LayoutReport, AppError> {
    let ctx = shell_context(args);
    let mut bar = TitleBar::new(config, args.width, Box::new(CellMeasure::default()));
    let mut main_loop = MainLoop::new();
    let mut log = EventLog::new();

    if args.mode.is_loading() {
        bar.set_loading_title(args.title.as_deref(), &mut main_loop);
    }
    bar.set_requested_state(requested_state(args)?, &mut main_loop);
    bar.reconcile_now(&ctx, &mut main_loop, &mut log);

    Ok(LayoutReport::capture(&bar, &log))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars
    let config = {
        let config_file = titlebar::config::load_config_with_precedence(args.config.clone())?;
        let merged = titlebar::config::merge_config(config_file);
        titlebar::config::apply_env_overrides(merged)
    };

    titlebar::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let report = preview(&args, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{report}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlebar::model::ButtonKind;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["titlebar", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["titlebar", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["titlebar"]);
        assert_eq!(args.width, 800);
        assert_eq!(args.mode, RenderMode::Home);
        assert_eq!(args.status_width, None);
        assert_eq!(args.title, None);
        assert!(!args.waiting);
        assert!(!args.json);
        assert!(args.state.is_empty());
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_mode_accepts_kebab_case() {
        let args = Args::parse_from(["titlebar", "--mode", "home-edit-portrait"]);
        assert_eq!(args.mode, RenderMode::HomeEditPortrait);
    }

    #[test]
    fn test_invalid_mode_rejects() {
        let result = Args::try_parse_from(["titlebar", "--mode", "desktop"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_negative_width_rejects() {
        let result = Args::try_parse_from(["titlebar", "--width", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_status_width_rejects() {
        let result = Args::try_parse_from(["titlebar", "--status-width=-5"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_state_list_is_comma_separated() {
        let args = Args::parse_from(["titlebar", "--state", "btn_switcher,FULL_WIDTH"]);
        let state = requested_state(&args).expect("known flags");
        assert_eq!(state, VisualState::BTN_SWITCHER | VisualState::FULL_WIDTH);
    }

    #[test]
    fn test_unknown_state_flag_is_an_error() {
        let args = Args::parse_from(["titlebar", "--state", "BTN_SPARKLE"]);
        let err = requested_state(&args).unwrap_err();
        assert!(matches!(err, AppError::UnknownFlag(name) if name == "BTN_SPARKLE"));
    }

    #[test]
    fn test_small_buttons_and_foreground_flags() {
        let args = Args::parse_from(["titlebar", "--small-buttons", "--foreground"]);
        let state = requested_state(&args).expect("no custom flags");
        assert_eq!(state, VisualState::SMALL_BUTTONS | VisualState::FOREGROUND);
    }

    #[test]
    fn test_app_preview_shows_title_and_close() {
        let args = Args::parse_from([
            "titlebar",
            "--mode",
            "app",
            "--title",
            "Notes",
            "--close",
            "--state",
            "BTN_SWITCHER",
            "--status-width",
            "100",
        ]);
        let report = preview(&args, &ResolvedConfig::default()).expect("preview");
        assert_eq!(report.title.as_deref(), Some("Notes"));
        let close = report.row(ButtonKind::Close).expect("close row");
        assert!(close.visible);
        let sep = report.row(ButtonKind::SeparatorStatus).expect("separator row");
        assert_eq!(sep.x, 112 + 100);
    }

    #[test]
    fn test_loading_preview_uses_title_as_loading_title() {
        let args = Args::parse_from(["titlebar", "--mode", "loading", "--title", "Opening"]);
        let report = preview(&args, &ResolvedConfig::default()).expect("preview");
        assert_eq!(report.title.as_deref(), Some("Opening"));
        assert!(report.elements.iter().any(|r| r.name == "progress" && r.visible));
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["titlebar", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
