// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation configuration.
//!
//! A [`Configuration`] bundles everything about *how* an indicator is
//! presented: interaction callbacks, the auto-dismiss duration, sizing and
//! spacing, and resolved colors and fonts. It is immutable; defaults are
//! resolved exactly once at build time, in precedence order: explicit
//! override → theme resource → hard-coded default.

use alloc::rc::Rc;
use core::fmt;

use kurbo::Insets;
use peniko::Color;
use pillbox_layout::{DEFAULT_CONTENT_PADDING, DEFAULT_ITEM_SPACING, SizingMode};

use crate::controller::PresentationController;
use crate::env::PresentationEnv;
use crate::theme::{
    BACKGROUND_COLOR, FontSpec, FontWeight, SUBTITLE_COLOR, SUBTITLE_FONT, TITLE_COLOR,
    TITLE_FONT, Theme,
};

/// A caller-supplied interaction callback.
///
/// Receives the controller the event happened on, plus the environment so
/// the callback can drive the lifecycle (a tap handler that dismisses, for
/// example).
pub type Action = Rc<dyn Fn(&PresentationController, &mut dyn PresentationEnv)>;

/// Default auto-dismiss duration, in seconds.
pub const DEFAULT_DURATION: f64 = 3.0;

const DEFAULT_TITLE_COLOR: Color = Color::BLACK;
const DEFAULT_SUBTITLE_COLOR: Color = Color::from_rgb8(85, 85, 85);
const DEFAULT_BACKGROUND_COLOR: Color = Color::WHITE;
const DEFAULT_TITLE_FONT: FontSpec = FontSpec::new(13.0, FontWeight::Bold);
const DEFAULT_SUBTITLE_FONT: FontSpec = FontSpec::new(13.0, FontWeight::Bold);

/// Immutable presentation configuration. Built with [`ConfigurationBuilder`].
///
/// ```
/// use pillbox_presentation::{Configuration, DEFAULT_DURATION};
///
/// let config = Configuration::builder().duration(5.0).build();
/// assert_eq!(config.duration(), 5.0);
/// assert_eq!(Configuration::default().duration(), DEFAULT_DURATION);
/// ```
#[derive(Clone)]
pub struct Configuration {
    tap: Option<Action>,
    appeared: Option<Action>,
    dismissed: Option<Action>,
    duration: f64,
    sizing: SizingMode,
    content_padding: Insets,
    horizontal_item_spacing: f64,
    title_color: Color,
    subtitle_color: Color,
    background_color: Color,
    title_font: FontSpec,
    subtitle_font: FontSpec,
}

impl Configuration {
    /// Returns a builder with no overrides set.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Handler invoked when the user taps the indicator.
    #[must_use]
    pub fn tap(&self) -> Option<Action> {
        self.tap.clone()
    }

    /// Handler invoked when the show transition reaches its natural end.
    #[must_use]
    pub fn appeared(&self) -> Option<Action> {
        self.appeared.clone()
    }

    /// Handler invoked when the indicator has fully disappeared.
    #[must_use]
    pub fn dismissed(&self) -> Option<Action> {
        self.dismissed.clone()
    }

    /// Seconds the indicator stays on screen absent interaction.
    #[must_use]
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sizing mode for the indicator.
    #[must_use]
    #[inline]
    pub fn sizing(&self) -> SizingMode {
        self.sizing
    }

    /// Padding around the content area inside the indicator.
    #[must_use]
    #[inline]
    pub fn content_padding(&self) -> Insets {
        self.content_padding
    }

    /// Gap between the attachment and the text block.
    #[must_use]
    #[inline]
    pub fn horizontal_item_spacing(&self) -> f64 {
        self.horizontal_item_spacing
    }

    /// Title text color.
    #[must_use]
    #[inline]
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    /// Subtitle text color.
    #[must_use]
    #[inline]
    pub fn subtitle_color(&self) -> Color {
        self.subtitle_color
    }

    /// Indicator background color.
    #[must_use]
    #[inline]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Title font.
    #[must_use]
    #[inline]
    pub fn title_font(&self) -> FontSpec {
        self.title_font
    }

    /// Subtitle font.
    #[must_use]
    #[inline]
    pub fn subtitle_font(&self) -> FontSpec {
        self.subtitle_font
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("tap", &self.tap.is_some())
            .field("appeared", &self.appeared.is_some())
            .field("dismissed", &self.dismissed.is_some())
            .field("duration", &self.duration)
            .field("sizing", &self.sizing)
            .field("content_padding", &self.content_padding)
            .field("horizontal_item_spacing", &self.horizontal_item_spacing)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Configuration`].
///
/// Unset fields resolve from the theme passed to [`Self::theme`], then from
/// hard-coded defaults; a missing theme resource never fails.
#[derive(Clone, Default)]
pub struct ConfigurationBuilder {
    theme: Option<Theme>,
    tap: Option<Action>,
    appeared: Option<Action>,
    dismissed: Option<Action>,
    duration: Option<f64>,
    sizing: Option<SizingMode>,
    content_padding: Option<Insets>,
    horizontal_item_spacing: Option<f64>,
    title_color: Option<Color>,
    subtitle_color: Option<Color>,
    background_color: Option<Color>,
    title_font: Option<FontSpec>,
    subtitle_font: Option<FontSpec>,
}

impl ConfigurationBuilder {
    /// Resolves unset colors and fonts from `theme`.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the tap handler.
    #[must_use]
    pub fn on_tap(mut self, action: impl Fn(&PresentationController, &mut dyn PresentationEnv) + 'static) -> Self {
        self.tap = Some(Rc::new(action));
        self
    }

    /// Sets the appeared handler.
    #[must_use]
    pub fn on_appeared(mut self, action: impl Fn(&PresentationController, &mut dyn PresentationEnv) + 'static) -> Self {
        self.appeared = Some(Rc::new(action));
        self
    }

    /// Sets the dismissed handler.
    #[must_use]
    pub fn on_dismissed(mut self, action: impl Fn(&PresentationController, &mut dyn PresentationEnv) + 'static) -> Self {
        self.dismissed = Some(Rc::new(action));
        self
    }

    /// Sets the auto-dismiss duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets the sizing mode.
    #[must_use]
    pub fn sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = Some(sizing);
        self
    }

    /// Sets the content padding.
    #[must_use]
    pub fn content_padding(mut self, padding: Insets) -> Self {
        self.content_padding = Some(padding);
        self
    }

    /// Sets the attachment/text gap.
    #[must_use]
    pub fn horizontal_item_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_item_spacing = Some(spacing);
        self
    }

    /// Sets the title color.
    #[must_use]
    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    /// Sets the subtitle color.
    #[must_use]
    pub fn subtitle_color(mut self, color: Color) -> Self {
        self.subtitle_color = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the title font.
    #[must_use]
    pub fn title_font(mut self, font: FontSpec) -> Self {
        self.title_font = Some(font);
        self
    }

    /// Sets the subtitle font.
    #[must_use]
    pub fn subtitle_font(mut self, font: FontSpec) -> Self {
        self.subtitle_font = Some(font);
        self
    }

    /// Builds the configuration, resolving every unset field.
    #[must_use]
    pub fn build(self) -> Configuration {
        let theme = self.theme.unwrap_or_default();
        Configuration {
            tap: self.tap,
            appeared: self.appeared,
            dismissed: self.dismissed,
            duration: self.duration.unwrap_or(DEFAULT_DURATION),
            sizing: self.sizing.unwrap_or_default(),
            content_padding: self.content_padding.unwrap_or(DEFAULT_CONTENT_PADDING),
            horizontal_item_spacing: self
                .horizontal_item_spacing
                .unwrap_or(DEFAULT_ITEM_SPACING),
            title_color: self
                .title_color
                .or_else(|| theme.color(TITLE_COLOR))
                .unwrap_or(DEFAULT_TITLE_COLOR),
            subtitle_color: self
                .subtitle_color
                .or_else(|| theme.color(SUBTITLE_COLOR))
                .unwrap_or(DEFAULT_SUBTITLE_COLOR),
            background_color: self
                .background_color
                .or_else(|| theme.color(BACKGROUND_COLOR))
                .unwrap_or(DEFAULT_BACKGROUND_COLOR),
            title_font: self
                .title_font
                .or_else(|| theme.font(TITLE_FONT))
                .unwrap_or(DEFAULT_TITLE_FONT),
            subtitle_font: self
                .subtitle_font
                .or_else(|| theme.font(SUBTITLE_FONT))
                .unwrap_or(DEFAULT_SUBTITLE_FONT),
        }
    }
}

impl fmt::Debug for ConfigurationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationBuilder")
            .field("duration", &self.duration)
            .field("sizing", &self.sizing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeBuilder;
    use kurbo::Size;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Configuration::default();
        assert_eq!(config.duration(), 3.0);
        assert_eq!(config.sizing(), SizingMode::Custom(Size::new(215.0, 50.0)));
        assert_eq!(config.content_padding().y0, 8.0);
        assert_eq!(config.content_padding().x0, 16.0);
        assert_eq!(config.horizontal_item_spacing(), 8.0);
        assert_eq!(config.title_color(), Color::BLACK);
        assert_eq!(config.subtitle_color(), Color::from_rgb8(85, 85, 85));
        assert_eq!(config.background_color(), Color::WHITE);
        assert_eq!(config.title_font(), FontSpec::new(13.0, FontWeight::Bold));
        assert_eq!(config.subtitle_font(), FontSpec::new(13.0, FontWeight::Bold));
        assert!(config.tap().is_none());
        assert!(config.appeared().is_none());
        assert!(config.dismissed().is_none());
    }

    #[test]
    fn theme_resources_fill_unset_fields() {
        let theme = ThemeBuilder::new()
            .set_color(TITLE_COLOR, Color::WHITE)
            .set_font(SUBTITLE_FONT, FontSpec::new(11.0, FontWeight::Normal))
            .build();
        let config = Configuration::builder().theme(theme).build();

        assert_eq!(config.title_color(), Color::WHITE);
        assert_eq!(config.subtitle_font(), FontSpec::new(11.0, FontWeight::Normal));
        // Resources the theme does not carry fall back to hard defaults.
        assert_eq!(config.background_color(), Color::WHITE);
        assert_eq!(config.subtitle_color(), Color::from_rgb8(85, 85, 85));
    }

    #[test]
    fn explicit_overrides_beat_the_theme() {
        let theme = ThemeBuilder::new()
            .set_color(TITLE_COLOR, Color::WHITE)
            .build();
        let config = Configuration::builder()
            .theme(theme)
            .title_color(Color::BLACK)
            .build();
        assert_eq!(config.title_color(), Color::BLACK);
    }

    #[test]
    fn callbacks_are_retained() {
        let config = Configuration::builder()
            .on_tap(|_, _| {})
            .on_dismissed(|_, _| {})
            .build();
        assert!(config.tap().is_some());
        assert!(config.appeared().is_none());
        assert!(config.dismissed().is_some());
    }

    #[test]
    fn debug_reports_callback_presence_not_contents() {
        use alloc::format;
        let config = Configuration::builder().on_tap(|_, _| {}).build();
        let debug = format!("{config:?}");
        assert!(debug.contains("tap: true"));
        assert!(debug.contains("appeared: false"));
    }
}
