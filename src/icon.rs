// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded logo SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::resources::{images, keys};
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the logo to a 128x128 RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize_logo(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

fn rasterize_logo(target: u32) -> Option<Vec<u8>> {
    let data = images::bytes(keys::LOGO)?;
    let tree = match usvg::Tree::from_data(&data, &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            log::warn!("cannot parse logo for window icon: {err}");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}
