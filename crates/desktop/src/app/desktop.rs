//! Iced application implementation powering the Daybook window lifecycle.

use daybook_core::{PrefsStore, TaskBook, ThemeMode};
use iced::widget::Id;
use iced::{window, Size, Theme};

use crate::app::helpers::{iced_theme, system_prefers_dark};
use crate::app::message::Effect;
use crate::app::options::{DesktopOptions, ShellFlags};
use crate::app::state::{AddedNotice, DraftState, NavTab};
use crate::app::theme::Palette;
use crate::app::views;
use crate::telemetry::{self, Event as TelemetryEvent};

pub fn run(options: DesktopOptions) -> iced::Result {
    let _ = tracing_subscriber::fmt::try_init();

    let flags = ShellFlags {
        prefs_dir: options.prefs_dir,
        system_prefers_dark: system_prefers_dark(),
    };

    let window_settings = window::Settings {
        size: Size::new(1100.0, 720.0),
        min_size: Some(Size::new(800.0, 560.0)),
        ..window::Settings::default()
    };

    iced::application(
        move || DaybookDesktop::bootstrap(flags.clone()),
        DaybookDesktop::react,
        views::compose_root,
    )
    .window(window_settings)
    .title(app_title)
    .theme(app_theme)
    .run()
}

fn app_title(_state: &DaybookDesktop) -> String {
    format!("Daybook v{}", env!("CARGO_PKG_VERSION"))
}

fn app_theme(state: &DaybookDesktop) -> Option<Theme> {
    Some(iced_theme(state.mode))
}

pub(crate) struct DaybookDesktop {
    pub(crate) book: TaskBook,
    pub(crate) active: NavTab,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) mode: ThemeMode,
    pub(crate) palette: Palette,
    pub(crate) prefs: Option<PrefsStore>,
    pub(crate) telemetry: telemetry::Handle,
    pub(crate) draft: DraftState,
    pub(crate) draft_input_id: Id,
    pub(crate) search: String,
    pub(crate) search_input_id: Id,
    pub(crate) added_notice: AddedNotice,
    pub(crate) revision: u64,
}

impl DaybookDesktop {
    pub(super) fn bootstrap(flags: ShellFlags) -> (Self, Effect) {
        let telemetry = telemetry::Handle::new();
        telemetry.record(TelemetryEvent::AppStarted);

        let prefs = match PrefsStore::discover(flags.prefs_dir.clone()) {
            Ok(store) => Some(store),
            Err(err) => {
                tracing::warn!(error = %err, "preferences unavailable; theme choice will not stick");
                None
            }
        };

        let stored = prefs.as_ref().and_then(|store| store.load_theme());
        let mode = ThemeMode::resolve(stored, flags.system_prefers_dark);
        telemetry.record(TelemetryEvent::ThemeResolved {
            mode,
            source: theme_source(stored, flags.system_prefers_dark),
        });

        // Persist the resolved mode right away; the next launch then starts
        // from an explicit choice even if the toggle is never touched.
        if let Some(store) = prefs.as_ref() {
            if let Err(err) = store.save_theme(mode) {
                tracing::warn!(error = %err, "failed to persist resolved theme");
            }
        }

        (
            Self {
                book: TaskBook::new(),
                active: NavTab::Home,
                sidebar_collapsed: false,
                mode,
                palette: Palette::for_mode(mode),
                prefs,
                telemetry,
                draft: DraftState::new(),
                draft_input_id: Id::new("draft_text_input"),
                search: String::new(),
                search_input_id: Id::new("search_input"),
                added_notice: AddedNotice::default(),
                revision: 0,
            },
            Effect::none(),
        )
    }
}

fn theme_source(stored: Option<ThemeMode>, system_prefers_dark: Option<bool>) -> &'static str {
    if stored.is_some() {
        "stored"
    } else if system_prefers_dark.is_some() {
        "system"
    } else {
        "default"
    }
}
