// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pillbox Content: declarative content value objects for indicator banners.
//!
//! This crate defines what an indicator *says*: a title, an optional
//! subtitle, and an optional image-or-emoji attachment. Everything here is
//! an immutable value — build it once, hand it to a presentation controller,
//! and derive variants with the `with_*` methods.
//!
//! ## Minimal example
//!
//! ```
//! use pillbox_content::{Content, EmojiAttachment, Text, TextAlignment};
//!
//! let content = Content::new(Text::new("Left Aligned", TextAlignment::Left))
//!     .with_attachment(Some(EmojiAttachment::new("🌼", TextAlignment::Left).into()));
//!
//! assert_eq!(content.title().value, "Left Aligned");
//! assert!(content.has_visible_attachment());
//! assert_eq!(content.emoji(), Some("🌼"));
//! ```
//!
//! ## Validation policy
//!
//! Attachment construction never fails. An emoji value that is not a single
//! emoji-presentation grapheme degrades to an *absent* value (the attachment
//! renders nothing), with a warning-level log diagnostic:
//!
//! ```
//! use pillbox_content::{EmojiAttachment, TextAlignment};
//!
//! let emoji = EmojiAttachment::new("AB", TextAlignment::Natural);
//! assert_eq!(emoji.value(), None);
//! ```
//!
//! ## Alignment
//!
//! [`TextAlignment::Natural`] resolves to left or right depending on the
//! host's [`LayoutDirection`]; resolution happens in layout code, not here.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod attachment;
pub mod content;
pub mod emoji;
pub mod text;

pub use attachment::{Attachment, EmojiAttachment, ImageAttachment, ImageData};
pub use content::Content;
pub use text::{LayoutDirection, Text, TextAlignment};
