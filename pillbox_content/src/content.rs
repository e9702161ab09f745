// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator contents.

use crate::attachment::{Attachment, ImageData};
use crate::text::Text;

/// The contents of an indicator: a title, an optional subtitle, and an
/// optional attachment.
///
/// `Content` is immutable once built; the `with_*` methods return a new
/// value with one field replaced.
///
/// ```
/// use pillbox_content::{Content, Text, TextAlignment};
///
/// let content = Content::new(Text::new("Saved", TextAlignment::Natural))
///     .with_subtitle(Some(Text::from("All changes synced")));
///
/// assert_eq!(content.subtitle().map(|s| s.value.as_str()), Some("All changes synced"));
/// ```
#[derive(Clone, Debug)]
pub struct Content {
    title: Text,
    subtitle: Option<Text>,
    attachment: Option<Attachment>,
}

impl Content {
    /// Creates content with a title and nothing else.
    #[must_use]
    pub fn new(title: Text) -> Self {
        Self {
            title,
            subtitle: None,
            attachment: None,
        }
    }

    /// Title text, shown with prominent appearance.
    #[must_use]
    pub fn title(&self) -> &Text {
        &self.title
    }

    /// Subtitle text. When absent, the title is centered vertically.
    #[must_use]
    pub fn subtitle(&self) -> Option<&Text> {
        self.subtitle.as_ref()
    }

    /// The attachment, if any was supplied.
    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Returns a copy with a new title.
    #[must_use]
    pub fn with_title(&self, title: Text) -> Self {
        Self {
            title,
            ..self.clone()
        }
    }

    /// Returns a copy with a new subtitle.
    #[must_use]
    pub fn with_subtitle(&self, subtitle: Option<Text>) -> Self {
        Self {
            subtitle,
            ..self.clone()
        }
    }

    /// Returns a copy with a new attachment.
    #[must_use]
    pub fn with_attachment(&self, attachment: Option<Attachment>) -> Self {
        Self {
            attachment,
            ..self.clone()
        }
    }

    /// Returns `true` if an attachment exists *and* has something to render.
    ///
    /// A degraded emoji or a zero-area image does not count.
    #[must_use]
    pub fn has_visible_attachment(&self) -> bool {
        self.attachment.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// The emoji value, if the attachment is a renderable emoji.
    #[must_use]
    pub fn emoji(&self) -> Option<&str> {
        match &self.attachment {
            Some(Attachment::Emoji(emoji)) => emoji.value(),
            _ => None,
        }
    }

    /// The bitmap, if the attachment is an image.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match &self.attachment {
            Some(Attachment::Image(image)) => image.value(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{EmojiAttachment, ImageAttachment};
    use crate::text::TextAlignment;

    #[test]
    fn new_content_has_title_only() {
        let content = Content::new(Text::from("Title"));
        assert_eq!(content.title().value, "Title");
        assert!(content.subtitle().is_none());
        assert!(content.attachment().is_none());
        assert!(!content.has_visible_attachment());
    }

    #[test]
    fn with_mutators_return_new_values() {
        let original = Content::new(Text::from("Title"));
        let updated = original
            .with_subtitle(Some(Text::from("Subtitle")))
            .with_title(Text::new("Updated", TextAlignment::Center));

        // The original is untouched.
        assert_eq!(original.title().value, "Title");
        assert!(original.subtitle().is_none());

        assert_eq!(updated.title().value, "Updated");
        assert_eq!(updated.subtitle().map(|s| s.value.as_str()), Some("Subtitle"));
    }

    #[test]
    fn with_subtitle_none_clears() {
        let content = Content::new(Text::from("Title"))
            .with_subtitle(Some(Text::from("Subtitle")))
            .with_subtitle(None);
        assert!(content.subtitle().is_none());
    }

    #[test]
    fn visible_attachment_requires_a_value() {
        let degraded = Content::new(Text::from("Title"))
            .with_attachment(Some(EmojiAttachment::new("AB", TextAlignment::Left).into()));
        assert!(degraded.attachment().is_some());
        assert!(!degraded.has_visible_attachment());
        assert_eq!(degraded.emoji(), None);

        let visible = Content::new(Text::from("Title"))
            .with_attachment(Some(EmojiAttachment::new("🌼", TextAlignment::Left).into()));
        assert!(visible.has_visible_attachment());
        assert_eq!(visible.emoji(), Some("🌼"));
    }

    #[test]
    fn emoji_and_image_accessors_do_not_cross() {
        let emoji = Content::new(Text::from("Title"))
            .with_attachment(Some(EmojiAttachment::new("🌼", TextAlignment::Left).into()));
        assert!(emoji.image().is_none());

        let image = Content::new(Text::from("Title"))
            .with_attachment(Some(ImageAttachment::new(None, TextAlignment::Left).into()));
        assert!(image.emoji().is_none());
        assert!(image.image().is_none());
    }
}
