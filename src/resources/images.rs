// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG images.
//!
//! Handles are built once at startup; `svg::Handle` clones are cheap, and
//! rebuilding one per frame would rehash the bytes.

use super::keys;
use iced::widget::svg;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct ImageAssets;

/// Raw bytes of the image stored under `key`.
pub fn bytes(key: &str) -> Option<std::borrow::Cow<'static, [u8]>> {
    ImageAssets::get(&format!("{key}.svg")).map(|file| file.data)
}

#[derive(Debug, Default)]
pub struct ImageCache {
    handles: HashMap<&'static str, svg::Handle>,
}

impl ImageCache {
    /// Builds a handle for every image key the screen uses.
    pub fn load() -> Self {
        let mut handles = HashMap::new();
        for key in keys::ALL_IMAGES {
            match bytes(key) {
                Some(data) => {
                    handles.insert(key, svg::Handle::from_memory(data));
                }
                None => log::warn!("embedded image {key}.svg not found"),
            }
        }
        Self { handles }
    }

    pub fn get(&self, key: &str) -> Option<svg::Handle> {
        self.handles.get(key).cloned()
    }
}
