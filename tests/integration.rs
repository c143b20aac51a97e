// SPDX-License-Identifier: MPL-2.0
use iced::widget::svg;
use iced::Font;
use iced_signin::config::{self, Config, GeneralConfig, WindowConfig};
use iced_signin::resources::{keys, EmbeddedResources, ResourceProvider};
use iced_signin::ui::sign_in::{
    Credentials, Event, Locale, Message, SignIn, TextDirection, VisibilityIcon, CONTACT_URL,
    TILE_KEYS,
};
use iced_signin::ui::theming::ThemeMode;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

/// Provider that echoes `key@locale`, so tests can tell which lookups happened.
struct EchoResources;

impl ResourceProvider for EchoResources {
    fn get_string(&self, key: &str, locale: Locale) -> String {
        format!("{key}@{}", locale.code())
    }

    fn get_image(&self, _key: &str) -> Option<svg::Handle> {
        None
    }

    fn get_font(&self, _key: &str) -> Font {
        Font::DEFAULT
    }
}

type Submissions = Rc<RefCell<Vec<(String, String)>>>;

fn recording_sign_in() -> (SignIn, Submissions) {
    let submissions: Submissions = Rc::default();
    let sink = Rc::clone(&submissions);
    let sign_in = SignIn::new(Locale::En).with_submit_handler(move |c: Credentials<'_>| {
        sink.borrow_mut()
            .push((c.username.to_string(), c.password.to_string()));
    });
    (sign_in, submissions)
}

#[test]
fn full_sign_in_flow_submits_once_enabled() {
    let (mut sign_in, submissions) = recording_sign_in();

    assert!(matches!(sign_in.update(Message::Submit), Event::None));
    assert!(submissions.borrow().is_empty());

    sign_in.update(Message::UsernameChanged("  ".into()));
    sign_in.update(Message::PasswordChanged("secret".into()));
    assert!(!sign_in.render(&EchoResources).login.enabled);
    assert!(matches!(sign_in.update(Message::Submit), Event::None));

    sign_in.update(Message::UsernameChanged(" mona ".into()));
    assert!(sign_in.render(&EchoResources).login.enabled);
    assert!(matches!(sign_in.update(Message::Submit), Event::Submitted));

    // Values are handed over untrimmed.
    assert_eq!(
        *submissions.borrow(),
        vec![(" mona ".to_string(), "secret".to_string())]
    );
}

#[test]
fn language_toggle_round_trips() {
    let mut sign_in = SignIn::default();
    sign_in.update(Message::UsernameChanged("user".into()));

    match sign_in.update(Message::ToggleLocale) {
        Event::LocaleChanged(locale) => assert_eq!(locale, Locale::Ar),
        other => panic!("unexpected event {other:?}"),
    }
    let vm = sign_in.render(&EchoResources);
    assert_eq!(vm.direction, TextDirection::Rtl);
    assert_eq!(vm.login.label.text, "login@ar");
    assert_eq!(vm.header.language_toggle.text, "AR_to_EN@ar");
    assert_eq!(vm.username.value, "user");

    sign_in.update(Message::ToggleLocale);
    let vm = sign_in.render(&EchoResources);
    assert_eq!(vm.locale, Locale::En);
    assert_eq!(vm.direction, TextDirection::Ltr);
}

#[test]
fn visibility_toggle_swaps_icon_and_mask() {
    let mut sign_in = SignIn::default();
    sign_in.update(Message::PasswordChanged("pw".into()));

    let vm = sign_in.render(&EchoResources);
    assert!(vm.password.masked);
    assert_eq!(vm.password.icon, VisibilityIcon::Hidden);
    assert_eq!(vm.password.icon_description, "show_password@en");

    sign_in.update(Message::ToggleVisibility);
    let vm = sign_in.render(&EchoResources);
    assert!(!vm.password.masked);
    assert_eq!(vm.password.icon, VisibilityIcon::Visible);
    assert_eq!(vm.password.value, "pw");
}

#[test]
fn contact_us_requests_the_bank_site() {
    let mut sign_in = SignIn::default();
    match sign_in.update(Message::ContactUs) {
        Event::OpenLink(url) => assert_eq!(url, CONTACT_URL),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn tiles_come_in_fixed_order() {
    let vm = SignIn::default().render(&EchoResources);
    let keys: Vec<_> = vm.tiles.iter().map(|tile| tile.key).collect();
    assert_eq!(keys, TILE_KEYS);
}

#[test]
fn embedded_resources_cover_both_locales() {
    let resources = EmbeddedResources::load().expect("resources should load");
    assert_eq!(resources.get_string(keys::LOGIN, Locale::En), "Login");
    assert_eq!(resources.get_string(keys::LOGIN, Locale::Ar), "تسجيل الدخول");
    assert_eq!(resources.get_string(keys::AR_TO_EN, Locale::En), "العربية");
    assert_eq!(resources.get_string(keys::AR_TO_EN, Locale::Ar), "English");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let arabic = Config {
        general: GeneralConfig {
            language: Some("ar".to_string()),
            theme_mode: ThemeMode::Light,
        },
        window: WindowConfig::default(),
    };
    config::save_to_path(&arabic, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, arabic);
    assert_eq!(loaded.locale(), Some(Locale::Ar));

    let (via_dir, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(via_dir.locale(), Some(Locale::Ar));
}

#[test]
fn tile_descriptions_are_translated() {
    let resources = EmbeddedResources::load().expect("resources should load");
    let mut sign_in = SignIn::default();

    let vm = sign_in.render(&resources);
    assert_eq!(vm.tiles[0].image_description, "Our products logo");
    assert_eq!(vm.tiles[3].image_description, "Nearest branch or ATM logo");

    sign_in.update(Message::ToggleLocale);
    let vm = sign_in.render(&resources);
    for tile in &vm.tiles {
        assert!(!tile.image_description.starts_with("MISSING:"));
        assert!(!tile.image_description.is_ascii());
    }
}

#[test]
fn write_config_leaves_unparsable_file_untouched() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let original = "[general]\nlanguage = \"ar\"\n\n[window]\nheight = 9x00\n";
    std::fs::write(&path, original).expect("Failed to write config file");

    let result = config::write_current_with_override(Some(dir.path().to_path_buf()));

    assert!(result.is_err());
    assert_eq!(
        std::fs::read_to_string(&path).expect("Failed to read config file"),
        original
    );
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}
