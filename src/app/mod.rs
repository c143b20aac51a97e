// SPDX-License-Identifier: MPL-2.0
//! Application root state for the sign-in window.
//!
//! The `App` struct wires the embedded resources, the sign-in controller and
//! the theme mode together, and turns controller events into side effects
//! such as opening the browser or logging a submission.

pub mod links;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::resources::{keys, EmbeddedResources, ResourceProvider};
use crate::ui::sign_in::{Credentials, Locale, SignIn, ViewModel};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    resources: EmbeddedResources,
    sign_in: SignIn,
    /// Latest projection of the sign-in state; rebuilt after every update.
    view_model: ViewModel,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sign_in", &self.sign_in)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Picks the startup locale: CLI flag, then `settings.toml`, then English.
pub fn resolve_locale(cli_lang: Option<&str>, config: &Config) -> Locale {
    if let Some(code) = cli_lang {
        match Locale::from_code(code) {
            Some(locale) => return locale,
            None => log::warn!("ignoring unsupported --lang {code:?}"),
        }
    }
    config.locale().unwrap_or_default()
}

/// Submission sink used until a real backend exists. Never logs the password.
fn log_submission(credentials: Credentials<'_>) {
    log::info!("sign-in requested for user {:?}", credentials.username);
}

/// Builds the window settings from the `[window]` section.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config, resources: EmbeddedResources) -> iced::Result {
    use std::cell::RefCell;

    let settings = window_settings(&config);

    // iced 0.14 requires a `Fn` boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config, resources)));
    let boot = move || {
        let (flags, config, resources) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(&flags, &config, resources)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .run()
}

impl App {
    /// Creates the application with the resolved locale and theme.
    pub fn new(flags: &Flags, config: &Config, resources: EmbeddedResources) -> Self {
        let locale = resolve_locale(flags.lang.as_deref(), config);
        log::info!("starting with locale {locale}");

        let sign_in = SignIn::new(locale).with_submit_handler(log_submission);
        let view_model = sign_in.render(&resources);

        Self {
            resources,
            sign_in,
            view_model,
            theme_mode: config.general.theme_mode,
        }
    }

    /// Current locale of the sign-in form.
    pub fn locale(&self) -> Locale {
        self.sign_in.state().locale()
    }

    /// The view model the next frame will be drawn from.
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn title(&self) -> String {
        self.resources.get_string(keys::WINDOW_TITLE, self.locale())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::update(&mut self.sign_in, message);
        self.view_model = self.sign_in.render(&self.resources);
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.view_model)
    }
}
