// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position targets and transition constants.
//!
//! The indicator travels vertically between two centers computed from the
//! host's width and the indicator's own measured height: settled at
//! `+1.5 × height` from the top, hidden at `−1.5 × height` (fully above the
//! visible area, with slack for the drop shadow).

use kurbo::{Point, Size};

/// Duration of the show and dismiss transitions, in seconds.
pub const TRANSITION_DURATION: f64 = 0.4;

/// Spring damping ratio for snap animations.
pub const SNAP_DAMPING: f64 = 0.6;

/// Initial spring velocity for snap animations.
pub const SNAP_INITIAL_VELOCITY: f64 = 0.3;

/// The settled on-screen center for an indicator of the given size.
#[must_use]
pub fn on_screen_center(host: Size, indicator: Size) -> Point {
    Point::new(host.width / 2.0, indicator.height * 1.5)
}

/// The hidden off-screen center for an indicator of the given size.
#[must_use]
pub fn off_screen_center(host: Size, indicator: Size) -> Point {
    Point::new(host.width / 2.0, -indicator.height * 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_are_horizontally_centered_on_the_host() {
        let host = Size::new(390.0, 844.0);
        let indicator = Size::new(215.0, 50.0);
        assert_eq!(on_screen_center(host, indicator).x, 195.0);
        assert_eq!(off_screen_center(host, indicator).x, 195.0);
    }

    #[test]
    fn vertical_targets_mirror_around_the_top_edge() {
        let host = Size::new(390.0, 844.0);
        let indicator = Size::new(215.0, 50.0);
        assert_eq!(on_screen_center(host, indicator).y, 75.0);
        assert_eq!(off_screen_center(host, indicator).y, -75.0);
    }

    #[test]
    fn targets_track_the_indicator_height() {
        let host = Size::new(390.0, 844.0);
        let tall = Size::new(215.0, 80.0);
        assert_eq!(on_screen_center(host, tall).y, 120.0);
        assert_eq!(off_screen_center(host, tall).y, -120.0);
    }
}
