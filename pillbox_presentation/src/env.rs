// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the presentation controller drives.
//!
//! The controller never renders, tweens, or sleeps. It invokes these traits
//! and receives the results back as events on the same thread:
//!
//! - [`AnimationDriver::begin_transition`] is a fire-and-forget registration;
//!   the host later calls
//!   [`PresentationController::animation_ended`](crate::PresentationController::animation_ended)
//!   with the returned handle.
//! - [`TimerService::schedule_timer`] arms a single-shot timer; the host
//!   later calls
//!   [`PresentationController::timer_fired`](crate::PresentationController::timer_fired).
//! - [`HostSurface`] exposes the parent surface the indicator attaches to.
//!
//! Handle identity is the controller's guard against stale completions, so
//! drivers must never reuse a live handle, must deliver completions
//! asynchronously (never from inside `begin_transition`), and must not
//! deliver any completion for a cancelled handle. Cancelling an unknown or
//! finished handle is a no-op.

use kurbo::{Point, Size};

/// Identifies one begun transition. Driver-assigned, never reused while live.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    /// Creates a handle from a raw driver token.
    #[must_use]
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw driver token.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identifies one armed timer. Service-assigned, never reused while live.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Creates a handle from a raw service token.
    #[must_use]
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw service token.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Timing curve for a transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransitionCurve {
    /// Symmetric ease-in-out.
    EaseInOut,
    /// Damped spring.
    Spring {
        /// Damping ratio; `1.0` is critically damped.
        damping: f64,
        /// Initial velocity as a fraction of the total travel per second.
        initial_velocity: f64,
    },
}

/// A requested movement of the indicator's center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Target center, in host coordinates.
    pub to: Point,
    /// Duration in seconds.
    pub duration: f64,
    /// Timing curve.
    pub curve: TransitionCurve,
}

/// How a transition finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionEnd {
    /// The transition ran to its natural end at the target.
    Completed,
    /// The transition was interrupted before reaching the target.
    Interrupted,
}

/// The parent surface an indicator is presented on.
pub trait HostSurface {
    /// Size of the host surface.
    fn host_size(&self) -> Size;

    /// Current measured size of the indicator.
    ///
    /// Queried immediately before every animated transition, since intrinsic
    /// sizing depends on content and available width. See `pillbox_layout`
    /// for the measurement contract.
    fn indicator_size(&mut self) -> Size;

    /// Adds the indicator as a child of the host surface.
    fn attach_indicator(&mut self);

    /// Removes the indicator from the host surface.
    fn detach_indicator(&mut self);

    /// Enables or disables taps and drags on the indicator.
    fn set_interaction_enabled(&mut self, enabled: bool);

    /// Moves the indicator's center synchronously (no animation).
    fn set_indicator_center(&mut self, center: Point);
}

/// Starts and cancels animated transitions of the indicator's center.
pub trait AnimationDriver {
    /// Begins a transition and returns its handle.
    fn begin_transition(&mut self, transition: Transition) -> AnimationHandle;

    /// Cancels a transition. No completion may be delivered for `handle`
    /// afterwards; unknown handles are ignored.
    fn cancel_transition(&mut self, handle: AnimationHandle);
}

/// Arms and cancels single-shot timers.
pub trait TimerService {
    /// Arms a timer that fires once after `after_seconds`.
    fn schedule_timer(&mut self, after_seconds: f64) -> TimerHandle;

    /// Cancels a pending timer; unknown handles are ignored.
    fn cancel_timer(&mut self, handle: TimerHandle);
}

/// The full environment a presentation controller needs.
///
/// Blanket-implemented for any type providing the three capabilities, so a
/// host implements `HostSurface + AnimationDriver + TimerService` and passes
/// `&mut` itself.
pub trait PresentationEnv: HostSurface + AnimationDriver + TimerService {}

impl<T: HostSurface + AnimationDriver + TimerService> PresentationEnv for T {}
