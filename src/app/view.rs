// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::sign_in::{self, ViewModel};
use iced::Element;

/// Draws the sign-in screen and lifts its messages into [`Message`].
pub(super) fn view(view_model: &ViewModel) -> Element<'_, Message> {
    sign_in::view(view_model).map(Message::SignIn)
}
