// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Forwards messages to the sign-in controller and performs the side effects
//! its events request.

use super::{links, Message};
use crate::ui::sign_in::{self, Event as SignInEvent, SignIn};
use iced::Task;

/// Applies `message` and returns any follow-up task.
pub(super) fn update(sign_in: &mut SignIn, message: Message) -> Task<Message> {
    match message {
        Message::SignIn(msg) => handle_sign_in_message(sign_in, msg),
    }
}

fn handle_sign_in_message(sign_in: &mut SignIn, message: sign_in::Message) -> Task<Message> {
    match sign_in.update(message) {
        SignInEvent::None => {}
        SignInEvent::LocaleChanged(locale) => {
            log::info!("locale switched to {locale}");
        }
        SignInEvent::Submitted => {
            log::debug!("sign-in form submitted");
        }
        SignInEvent::OpenLink(url) => {
            if let Err(err) = links::open(url) {
                log::warn!("could not open {url}: {err}");
            }
        }
    }
    Task::none()
}
