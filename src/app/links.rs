// SPDX-License-Identifier: MPL-2.0
//! Opens external links with the platform's default handler.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};
use url::Url;

/// Characters a shell would interpret; `cmd /C start` passes the URL through one.
const DANGEROUS_CHARS: &[char] = &[
    '`', '$', '|', ';', '&', '<', '>', '(', ')', '{', '}', '[', ']', '!', '^', '\n', '\r',
];

/// Parses `raw` and accepts only plain http(s) URLs without credentials
/// or shell metacharacters.
pub fn validate(raw: &str) -> Result<Url> {
    if raw.chars().any(|c| DANGEROUS_CHARS.contains(&c)) {
        return Err(Error::Link(
            "URL contains potentially dangerous characters".to_string(),
        ));
    }

    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::Link(format!(
                "refusing to open URL with scheme '{scheme}'"
            )));
        }
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(Error::Link(
            "refusing to open URL with embedded credentials".to_string(),
        ));
    }

    Ok(url)
}

/// Hands `raw` to the system browser. Does not wait for it.
pub fn open(raw: &str) -> Result<()> {
    let url = validate(raw)?;
    let mut command = platform_command(url.as_str());
    command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| Error::Link(format!("failed to open browser: {err}")))?;
    log::info!("opened {url}");
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg("--").arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    // The empty argument after "start" is the window title.
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::sign_in::CONTACT_URL;

    #[test]
    fn contact_url_is_accepted() {
        let url = validate(CONTACT_URL).expect("contact url should validate");
        assert_eq!(url.host_str(), Some("www.banquemisr.com"));
    }

    #[test]
    fn non_web_schemes_are_rejected() {
        for raw in ["file:///etc/passwd", "javascript:alert(1)", "ftp://example.com/"] {
            assert!(matches!(validate(raw), Err(Error::Link(_))), "{raw}");
        }
    }

    #[test]
    fn embedded_credentials_are_rejected() {
        assert!(validate("https://user:pw@example.com/").is_err());
        assert!(validate("https://user@example.com/").is_err());
    }

    #[test]
    fn shell_metacharacters_are_rejected() {
        for raw in [
            "https://example.com/?a=1&calc.exe",
            "https://example.com/|whoami",
            "https://example.com/^x",
            "https://example.com/$(id)",
        ] {
            assert!(matches!(validate(raw), Err(Error::Link(_))), "{raw}");
        }
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(validate("not a url"), Err(Error::Link(_))));
    }
}
