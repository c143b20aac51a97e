// SPDX-License-Identifier: MPL-2.0
//! Iced layout for the sign-in screen.
//!
//! Reads only the [`ViewModel`]. Right-to-left locales mirror every row and
//! right-align text and inputs.

use super::locale::TextDirection;
use super::view_model::{Label, PasswordField, TextField, Tile, ViewModel};
use super::Message;
use crate::resources::fonts;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, scrollable, svg, text, text_input, tooltip, Column, Container, Row, Text},
    Element, Length, Padding, Theme,
};

/// Render the sign-in screen.
pub fn view(vm: &ViewModel) -> Element<'_, Message> {
    let direction = vm.direction;

    let form = Column::new()
        .width(Length::Fill)
        .push(header(vm))
        .push(padded_top(spacing::XXS, username_field(&vm.username, direction)))
        .push(padded_top(spacing::SM, password_field(&vm.password, direction)))
        .push(padded_top(spacing::XS, forgot_link(&vm.forgot, direction)))
        .push(padded_top(spacing::MD, login_button(vm)))
        .push(padded_top(spacing::MD, help_line(vm)))
        .push(padded_top(spacing::XXL, divider()))
        .push(padded_top(spacing::MD, tiles(&vm.tiles, direction)));

    let centered = Container::new(
        Container::new(form)
            .max_width(sizing::FORM_MAX_WIDTH)
            .padding(spacing::LG),
    )
    .center_x(Length::Fill);

    Container::new(scrollable(centered))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

/// Horizontal alignment of the reading start edge.
fn start(direction: TextDirection) -> Horizontal {
    if direction.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    }
}

/// A row whose children are laid out from the reading start edge.
fn directional_row<'a>(
    direction: TextDirection,
    mut children: Vec<Element<'a, Message>>,
) -> Row<'a, Message> {
    if direction.is_rtl() {
        children.reverse();
    }
    Row::with_children(children)
}

fn padded_top<'a>(top: f32, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(Padding {
            top,
            ..Padding::ZERO
        })
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

fn label_text(label: &Label, size: f32, weight: Weight) -> Text<'_> {
    text(label.text.as_str())
        .size(size)
        .font(fonts::with_weight(label.font, weight))
}

fn header(vm: &ViewModel) -> Element<'_, Message> {
    let direction = vm.direction;

    let logo: Element<'_, Message> = match &vm.header.logo {
        Some(handle) => svg(handle.clone())
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into(),
        None => text(vm.header.logo_description.as_str()).into(),
    };

    let toggle_label = &vm.header.language_toggle;
    let toggle = button(
        text(toggle_label.text.as_str())
            .size(typography::BODY_LG)
            .font(toggle_label.font),
    )
    .padding(spacing::XXS)
    .style(styles::button::link)
    .on_press(Message::ToggleLocale);

    directional_row(
        direction,
        vec![
            Container::new(logo)
                .width(Length::Fill)
                .align_x(start(direction))
                .into(),
            toggle.into(),
        ],
    )
    .width(Length::Fill)
    .align_y(Vertical::Center)
    .into()
}

fn field_label(label: &Label, direction: TextDirection) -> Element<'_, Message> {
    label_text(label, typography::BODY, Weight::Semibold)
        .width(Length::Fill)
        .align_x(start(direction))
        .style(secondary_text)
        .into()
}

fn username_field(field: &TextField, direction: TextDirection) -> Element<'_, Message> {
    let input = text_input(&field.label.text, &field.value)
        .on_input(Message::UsernameChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .align_x(start(direction))
        .style(styles::text_input::outlined);

    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(&field.label, direction))
        .push(input)
        .into()
}

fn password_field(field: &PasswordField, direction: TextDirection) -> Element<'_, Message> {
    let input = text_input(&field.label.text, &field.value)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .secure(field.masked)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .align_x(start(direction))
        .style(styles::text_input::outlined);

    let glyph: Element<'_, Message> = match &field.icon_image {
        Some(handle) => svg(handle.clone())
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .into(),
        None => text(field.icon_description.as_str())
            .size(typography::CAPTION)
            .into(),
    };

    let toggle = button(
        Container::new(glyph)
            .center_x(Length::Fixed(sizing::ICON_BUTTON))
            .center_y(Length::Fixed(sizing::ICON_BUTTON)),
    )
    .padding(Padding::ZERO)
    .style(styles::button::icon)
    .on_press(Message::ToggleVisibility);

    let toggle = tooltip(
        toggle,
        text(field.icon_description.as_str()).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let row = directional_row(direction, vec![input.into(), toggle.into()])
        .spacing(spacing::XXS)
        .align_y(Vertical::Center);

    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(&field.label, direction))
        .push(row)
        .into()
}

fn forgot_link(label: &Label, direction: TextDirection) -> Element<'_, Message> {
    label_text(label, typography::CAPTION, Weight::Normal)
        .width(Length::Fill)
        .align_x(start(direction))
        .into()
}

fn login_button(vm: &ViewModel) -> Element<'_, Message> {
    let label = label_text(&vm.login.label, typography::BUTTON, Weight::Semibold)
        .width(Length::Fill)
        .height(Length::Fill)
        .center();

    button(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LOGIN_BUTTON_HEIGHT))
        .style(styles::button::login)
        .on_press_maybe(vm.login.enabled.then_some(Message::Submit))
        .into()
}

fn help_line(vm: &ViewModel) -> Element<'_, Message> {
    let prompt = label_text(&vm.help.prompt, typography::CAPTION, Weight::Bold);
    let link = button(label_text(&vm.help.link, typography::CAPTION, Weight::Semibold))
        .padding(Padding::ZERO)
        .style(styles::button::link)
        .on_press(Message::ContactUs);

    let row = directional_row(vm.direction, vec![prompt.into(), link.into()])
        .spacing(spacing::XXS)
        .align_y(Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .align_x(start(vm.direction))
        .into()
}

fn divider<'a>() -> Element<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::divider)
        .into()
}

fn tile(tile: &Tile) -> Element<'_, Message> {
    let mut column = Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    column = match &tile.image {
        Some(handle) => column.push(
            svg(handle.clone())
                .width(Length::Fixed(sizing::TILE_ICON))
                .height(Length::Fixed(sizing::TILE_ICON)),
        ),
        None => column.push(
            text(tile.image_description.as_str())
                .size(typography::CAPTION)
                .style(secondary_text),
        ),
    };

    column
        .push(
            label_text(&tile.label, typography::BODY, Weight::Semibold)
                .width(Length::Fill)
                .center(),
        )
        .into()
}

fn tiles(tiles: &[Tile], direction: TextDirection) -> Element<'_, Message> {
    directional_row(direction, tiles.iter().map(tile).collect())
        .width(Length::Fill)
        .spacing(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::EmbeddedResources;
    use crate::ui::sign_in::SignIn;

    #[test]
    fn view_renders_in_both_directions() {
        let resources = EmbeddedResources::load().expect("resources should load");
        let mut sign_in = SignIn::default();

        let vm = sign_in.render(&resources);
        let _element = view(&vm);

        sign_in.toggle_locale();
        sign_in.toggle_visibility();
        let vm = sign_in.render(&resources);
        let _element = view(&vm);
    }

    #[test]
    fn start_edge_follows_direction() {
        assert_eq!(start(TextDirection::Ltr), Horizontal::Left);
        assert_eq!(start(TextDirection::Rtl), Horizontal::Right);
    }
}
