// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pillbox Layout: the geometry contract an indicator renderer must satisfy.
//!
//! This crate computes indicator sizes and subview frames from pure inputs.
//! It performs no text shaping itself: callers measure the title block with
//! whatever text engine the host uses and pass the measured [`Size`] in.
//!
//! ## Coordinate spaces
//!
//! - [`fitted_size`] returns the indicator's own size.
//! - [`frames`] returns the content rect in *indicator space*, and the
//!   attachment and text rects in *content space* (origin at the content
//!   rect's top-left corner).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use pillbox_layout::{LayoutSpec, SizingMode, fitted_size};
//!
//! let spec = LayoutSpec::default(); // custom 215×50, padding 8/16, spacing 8
//! let size = fitted_size(&spec, false, Size::new(120.0, 16.0));
//!
//! // Narrow content shrinks the pill below the configured width.
//! assert!(size.width < 215.0);
//! assert_eq!(size.height, 50.0);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`); enable `std` (default)
//! or `libm` for float math.

#![no_std]

mod math;

use kurbo::{Insets, Point, Rect, Size};
use pillbox_content::Content;
pub use pillbox_content::{LayoutDirection, TextAlignment};

use crate::math::{ceil, floor};

/// Default fixed indicator size for [`SizingMode::Custom`].
pub const DEFAULT_SIZE: Size = Size::new(215.0, 50.0);

/// Default padding around the content area: 8 vertical, 16 horizontal.
pub const DEFAULT_CONTENT_PADDING: Insets = Insets {
    x0: 16.0,
    y0: 8.0,
    x1: 16.0,
    y1: 8.0,
};

/// Default gap between the attachment and the text block.
pub const DEFAULT_ITEM_SPACING: f64 = 8.0;

/// How the indicator's size is determined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizingMode {
    /// Size derives from the measured content.
    Intrinsic,
    /// A fixed target size; content may shrink the width below it.
    Custom(Size),
}

impl Default for SizingMode {
    fn default() -> Self {
        Self::Custom(DEFAULT_SIZE)
    }
}

/// Inputs to the layout computations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Sizing mode for the indicator.
    pub sizing: SizingMode,
    /// Padding around the content area inside the indicator.
    pub content_padding: Insets,
    /// Gap between the attachment and the text block.
    pub item_spacing: f64,
    /// Writing direction, used to resolve natural alignments.
    pub direction: LayoutDirection,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            sizing: SizingMode::default(),
            content_padding: DEFAULT_CONTENT_PADDING,
            item_spacing: DEFAULT_ITEM_SPACING,
            direction: LayoutDirection::default(),
        }
    }
}

/// Subview frames for one indicator.
///
/// `attachment` is [`Rect::ZERO`] when there is nothing to render in it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frames {
    /// Content area in indicator space.
    pub content: Rect,
    /// Attachment square in content space.
    pub attachment: Rect,
    /// Text block in content space.
    pub text: Rect,
}

/// Computes the indicator size that fits the given title block.
///
/// `title_size` is the measured size of the composite title/subtitle text,
/// measured against the sizing target (the custom size in custom mode, the
/// available width in intrinsic mode).
///
/// In custom mode, the configured width is an upper bound: narrow content
/// pulls the pill in tighter. Intrinsic mode derives both axes from the
/// title block; the extra point of width absorbs rounding slack in text
/// measurement so the block never wraps unexpectedly.
#[must_use]
pub fn fitted_size(spec: &LayoutSpec, has_attachment: bool, title_size: Size) -> Size {
    let padding = spec.content_padding;
    match spec.sizing {
        SizingMode::Custom(size) => {
            let attachment_width = if has_attachment {
                size.height - (padding.y0 + padding.y1)
            } else {
                0.0
            };
            let content_width = padding.x0
                + attachment_width
                + spec.item_spacing
                + title_size.width
                + padding.x1;
            Size::new(
                ceil(f64::min(size.width, content_width)),
                ceil(size.height),
            )
        }
        SizingMode::Intrinsic => {
            let attachment_width = if has_attachment { title_size.height } else { 0.0 };
            Size::new(
                ceil(padding.x0
                    + attachment_width
                    + spec.item_spacing
                    + title_size.width
                    + padding.x1)
                    + 1.0,
                ceil(title_size.height + padding.y0 + padding.y1),
            )
        }
    }
}

/// Computes subview frames for an indicator of the given size.
///
/// The attachment occupies a square of the content height, pinned to the
/// leading or trailing edge per its resolved alignment; the text block fills
/// the remainder beyond the item spacing. Without a renderable attachment
/// the text block spans the whole content area.
#[must_use]
pub fn frames(spec: &LayoutSpec, content: &Content, bounds: Size) -> Frames {
    let padding = spec.content_padding;
    let content_rect = Rect::new(
        padding.x0,
        padding.y0,
        bounds.width - padding.x1,
        bounds.height - padding.y1,
    );
    let content_size = content_rect.size();

    if !content.has_visible_attachment() {
        return Frames {
            content: content_rect,
            attachment: Rect::ZERO,
            text: content_size.to_rect(),
        };
    }

    let side = content_size.height;
    let leading = content
        .attachment()
        .is_some_and(|a| a.is_leading(spec.direction));

    let attachment = if leading {
        Rect::from_origin_size(Point::ORIGIN, Size::new(side, side))
    } else {
        Rect::from_origin_size(
            Point::new(content_size.width - side, 0.0),
            Size::new(side, side),
        )
    };

    let text = if leading {
        let x = side + spec.item_spacing;
        Rect::new(x, 0.0, content_size.width, content_size.height)
    } else {
        Rect::new(
            0.0,
            0.0,
            content_size.width - spec.item_spacing - side,
            content_size.height,
        )
    };

    Frames {
        content: content_rect,
        attachment,
        text,
    }
}

/// The indicator's corner radius: half the smaller dimension, which keeps
/// the ends fully rounded (the pill shape).
#[must_use]
pub fn corner_radius(bounds: Size) -> f64 {
    f64::min(bounds.width, bounds.height) / 2.0
}

/// Font size for an emoji attachment: 60% of the smaller dimension.
#[must_use]
pub fn emoji_font_size(bounds: Size) -> f64 {
    floor(f64::min(bounds.width, bounds.height) * (3.0 / 5.0))
}
