// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme resource lookup.
//!
//! A [`Theme`] maps [`ResourceKey`]s to typed resources (colors and font
//! specs). Themes are immutable after creation and cheap to clone; a missing
//! resource is never an error — configuration resolution falls back to
//! hard-coded defaults.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

/// A key for looking up resources in a [`Theme`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(u16);

impl ResourceKey {
    /// Creates a new resource key with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this resource key.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceKey").field(&self.0).finish()
    }
}

/// Title text color.
pub const TITLE_COLOR: ResourceKey = ResourceKey::new(0);
/// Subtitle text color.
pub const SUBTITLE_COLOR: ResourceKey = ResourceKey::new(1);
/// Indicator background color.
pub const BACKGROUND_COLOR: ResourceKey = ResourceKey::new(2);
/// Title font.
pub const TITLE_FONT: ResourceKey = ResourceKey::new(3);
/// Subtitle font.
pub const SUBTITLE_FONT: ResourceKey = ResourceKey::new(4);

/// Weight of an indicator font.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Bold weight (the indicator default).
    #[default]
    Bold,
}

/// A font request the host's text engine resolves against its own faces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Point size.
    pub size: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// Creates a new font spec.
    #[must_use]
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

/// A typed theme resource.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Resource {
    /// A color resource.
    Color(Color),
    /// A font resource.
    Font(FontSpec),
}

/// A collection of themed resources.
///
/// Internally wraps an `Rc`, making cloning cheap; resources are stored in a
/// vector sorted by key for binary-search lookup. Use [`ThemeBuilder`] to
/// construct one.
///
/// ```
/// use peniko::Color;
/// use pillbox_presentation::theme::{BACKGROUND_COLOR, Theme, ThemeBuilder};
///
/// let dark = ThemeBuilder::new()
///     .set_color(BACKGROUND_COLOR, Color::from_rgb8(0x1E, 0x1E, 0x1E))
///     .build();
///
/// assert_eq!(dark.color(BACKGROUND_COLOR), Some(Color::from_rgb8(0x1E, 0x1E, 0x1E)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Theme {
    inner: Rc<ThemeData>,
}

#[derive(Debug, Default)]
struct ThemeData {
    /// Sorted by `ResourceKey` for binary search lookup.
    resources: Vec<(ResourceKey, Resource)>,
}

impl Theme {
    /// Returns `true` if this theme has no resources.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.resources.is_empty()
    }

    /// Returns the number of resources in this theme.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.resources.len()
    }

    /// Gets the resource for a key, if present.
    #[must_use]
    pub fn get(&self, key: ResourceKey) -> Option<Resource> {
        self.inner
            .resources
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .map(|idx| self.inner.resources[idx].1)
    }

    /// Gets the color for a key, if present and a color.
    #[must_use]
    pub fn color(&self, key: ResourceKey) -> Option<Color> {
        match self.get(key) {
            Some(Resource::Color(color)) => Some(color),
            _ => None,
        }
    }

    /// Gets the font for a key, if present and a font.
    #[must_use]
    pub fn font(&self, key: ResourceKey) -> Option<FontSpec> {
        match self.get(key) {
            Some(Resource::Font(font)) => Some(font),
            _ => None,
        }
    }
}

/// Builder for constructing [`Theme`] instances.
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    resources: Vec<(ResourceKey, Resource)>,
}

impl ThemeBuilder {
    /// Creates a new empty theme builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a resource, replacing any previous value for the key.
    #[must_use]
    pub fn set(mut self, key: ResourceKey, resource: Resource) -> Self {
        match self.resources.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => {
                self.resources[idx].1 = resource;
            }
            Err(idx) => {
                self.resources.insert(idx, (key, resource));
            }
        }
        self
    }

    /// Sets a color resource.
    #[must_use]
    pub fn set_color(self, key: ResourceKey, color: Color) -> Self {
        self.set(key, Resource::Color(color))
    }

    /// Sets a font resource.
    #[must_use]
    pub fn set_font(self, key: ResourceKey, font: FontSpec) -> Self {
        self.set(key, Resource::Font(font))
    }

    /// Builds the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        Theme {
            inner: Rc::new(ThemeData {
                resources: self.resources,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theme_has_no_resources() {
        let theme = Theme::default();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
        assert_eq!(theme.color(TITLE_COLOR), None);
        assert_eq!(theme.font(TITLE_FONT), None);
    }

    #[test]
    fn lookup_by_key() {
        let theme = ThemeBuilder::new()
            .set_color(TITLE_COLOR, Color::BLACK)
            .set_font(TITLE_FONT, FontSpec::new(13.0, FontWeight::Bold))
            .build();

        assert_eq!(theme.len(), 2);
        assert_eq!(theme.color(TITLE_COLOR), Some(Color::BLACK));
        assert_eq!(theme.font(TITLE_FONT), Some(FontSpec::new(13.0, FontWeight::Bold)));
        assert_eq!(theme.color(BACKGROUND_COLOR), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let theme = ThemeBuilder::new()
            .set_color(TITLE_COLOR, Color::BLACK)
            .set_color(TITLE_COLOR, Color::WHITE)
            .build();

        assert_eq!(theme.len(), 1);
        assert_eq!(theme.color(TITLE_COLOR), Some(Color::WHITE));
    }

    #[test]
    fn typed_lookups_do_not_cross() {
        let theme = ThemeBuilder::new()
            .set_color(TITLE_FONT, Color::BLACK) // wrong kind on purpose
            .build();
        assert_eq!(theme.font(TITLE_FONT), None);
        assert_eq!(theme.color(TITLE_FONT), Some(Color::BLACK));
    }

    #[test]
    fn clone_is_cheap_and_shares_data() {
        let theme = ThemeBuilder::new()
            .set_color(TITLE_COLOR, Color::BLACK)
            .build();
        let clone = theme.clone();
        assert!(Rc::ptr_eq(&theme.inner, &clone.inner));
    }

    #[test]
    fn keys_stay_sorted_regardless_of_insertion_order() {
        let theme = ThemeBuilder::new()
            .set_font(SUBTITLE_FONT, FontSpec::new(11.0, FontWeight::Normal))
            .set_color(TITLE_COLOR, Color::BLACK)
            .set_color(BACKGROUND_COLOR, Color::WHITE)
            .build();

        assert_eq!(theme.color(TITLE_COLOR), Some(Color::BLACK));
        assert_eq!(theme.color(BACKGROUND_COLOR), Some(Color::WHITE));
        assert_eq!(
            theme.font(SUBTITLE_FONT),
            Some(FontSpec::new(11.0, FontWeight::Normal))
        );
    }
}
