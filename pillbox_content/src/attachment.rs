// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image and emoji attachments.
//!
//! An attachment is shown in a prominent position alongside the text contents
//! of an indicator. Construction is non-fatal by design: invalid input
//! degrades to an attachment with an absent value, which renders nothing.

use alloc::string::String;
use peniko::{Blob, ImageAlphaType, ImageFormat};
use unicode_segmentation::UnicodeSegmentation;

use crate::emoji::is_emoji_presentation;
use crate::text::{LayoutDirection, TextAlignment};

/// A decoded bitmap for an image attachment.
///
/// Pixel data is shared via [`Blob`], so cloning an attachment never copies
/// the pixels.
#[derive(Clone, Debug)]
pub struct ImageData {
    /// Raw pixel bytes in `format` layout.
    pub data: Blob<u8>,
    /// Pixel format of `data`.
    pub format: ImageFormat,
    /// Alpha interpretation of `data`.
    pub alpha_type: ImageAlphaType,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A bitmap with alignment metadata.
#[derive(Clone, Debug)]
pub struct ImageAttachment {
    value: Option<ImageData>,
    alignment: TextAlignment,
}

impl ImageAttachment {
    /// Creates a new image attachment.
    #[must_use]
    pub fn new(value: Option<ImageData>, alignment: TextAlignment) -> Self {
        Self { value, alignment }
    }

    /// Returns the bitmap, if present.
    #[must_use]
    pub fn value(&self) -> Option<&ImageData> {
        self.value.as_ref()
    }

    /// Returns the alignment.
    #[must_use]
    #[inline]
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Returns `true` if there is nothing to render.
    ///
    /// A zero-area bitmap counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Some(image) => image.width == 0 || image.height == 0,
            None => true,
        }
    }
}

/// A single emoji grapheme with alignment metadata.
///
/// The value is constrained to the emoji-presentation scalar space; see
/// [`EmojiAttachment::new`] for the validation policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiAttachment {
    value: Option<String>,
    alignment: TextAlignment,
}

impl EmojiAttachment {
    /// Creates a new emoji attachment.
    ///
    /// `value` must be exactly one grapheme cluster whose scalars all have
    /// emoji presentation. Anything else — an empty string, multiple
    /// graphemes, or text-presentation scalars — degrades to an absent value
    /// with a warning diagnostic; construction itself never fails.
    ///
    /// ```
    /// use pillbox_content::{EmojiAttachment, TextAlignment};
    ///
    /// let valid = EmojiAttachment::new("🌼", TextAlignment::Left);
    /// assert_eq!(valid.value(), Some("🌼"));
    ///
    /// let invalid = EmojiAttachment::new("AB", TextAlignment::Left);
    /// assert_eq!(invalid.value(), None);
    /// ```
    #[must_use]
    pub fn new(value: impl Into<String>, alignment: TextAlignment) -> Self {
        let value = value.into();

        let mut graphemes = value.graphemes(true);
        let valid = matches!(
            (graphemes.next(), graphemes.next()),
            (Some(grapheme), None) if grapheme.chars().all(is_emoji_presentation)
        );

        if !valid {
            log::warn!("supplied value {value:?} is not a valid emoji character; will not render");
            return Self {
                value: None,
                alignment,
            };
        }

        Self {
            value: Some(value),
            alignment,
        }
    }

    /// Returns the emoji, if the supplied value was valid.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the alignment.
    #[must_use]
    #[inline]
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Returns `true` if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// An attachment is either an image or an emoji.
#[derive(Clone, Debug)]
pub enum Attachment {
    /// A bitmap attachment.
    Image(ImageAttachment),
    /// A single-emoji attachment.
    Emoji(EmojiAttachment),
}

impl Attachment {
    /// Returns the attachment's alignment.
    ///
    /// Attachments render on the left or right edge only; `Center` falls
    /// back to the trailing edge at layout time.
    #[must_use]
    pub fn alignment(&self) -> TextAlignment {
        match self {
            Self::Image(image) => image.alignment(),
            Self::Emoji(emoji) => emoji.alignment(),
        }
    }

    /// Returns `true` if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Image(image) => image.is_empty(),
            Self::Emoji(emoji) => emoji.is_empty(),
        }
    }

    /// Returns `true` if the attachment sits on the leading edge under the
    /// given writing direction.
    #[must_use]
    pub fn is_leading(&self, direction: LayoutDirection) -> bool {
        self.alignment().is_leading(direction)
    }
}

impl From<ImageAttachment> for Attachment {
    fn from(image: ImageAttachment) -> Self {
        Self::Image(image)
    }
}

impl From<EmojiAttachment> for Attachment {
    fn from(emoji: EmojiAttachment) -> Self {
        Self::Emoji(emoji)
    }
}
