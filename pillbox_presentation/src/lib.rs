// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pillbox Presentation: the lifecycle controller for indicator banners.
//!
//! This crate owns everything that happens *after* content is built: the
//! show transition, auto-dismiss timing with interaction-based reset,
//! drag-to-dismiss with elastic rubber-banding, programmatic dismissal, and
//! teardown. It is headless — rendering, animation tweening, timers, and
//! gesture recognition live in the host, behind the [`env`] capability
//! traits, and the host feeds their outcomes back as events.
//!
//! ## Roles
//!
//! - [`PresentationController`]: one indicator's lifecycle, start to finish.
//! - [`PresenterRegistry`]: the process-scoped table of presented
//!   controllers; it keeps an in-flight indicator alive when the caller
//!   drops its own handle, and guards against double presentation.
//! - [`Configuration`] / [`theme::Theme`]: immutable presentation settings,
//!   resolved once at build time.
//! - [`easing`] / [`geometry`]: the rubber-band curve and position targets.
//!
//! ## Driving a controller
//!
//! The host implements [`env::HostSurface`], [`env::AnimationDriver`], and
//! [`env::TimerService`], then forwards completions, timer fires, taps, and
//! pointer phases to the controller. Everything runs on one UI-affine
//! thread; the controller tolerates late deliveries by checking handle
//! identity.
//!
//! ```
//! use kurbo::{Point, Size};
//! use pillbox_content::{Content, Text};
//! use pillbox_presentation::env::{
//!     AnimationDriver, AnimationHandle, HostSurface, TimerHandle, TimerService, Transition,
//!     TransitionEnd,
//! };
//! use pillbox_presentation::{Configuration, PresentationController, PresenterRegistry};
//!
//! /// A minimal host: hands out handles and remembers the most recent ones.
//! #[derive(Default)]
//! struct Host {
//!     next_token: u64,
//!     transition: Option<AnimationHandle>,
//!     timer: Option<TimerHandle>,
//! }
//!
//! impl HostSurface for Host {
//!     fn host_size(&self) -> Size {
//!         Size::new(390.0, 844.0)
//!     }
//!     fn indicator_size(&mut self) -> Size {
//!         Size::new(215.0, 50.0)
//!     }
//!     fn attach_indicator(&mut self) {}
//!     fn detach_indicator(&mut self) {}
//!     fn set_interaction_enabled(&mut self, _enabled: bool) {}
//!     fn set_indicator_center(&mut self, _center: Point) {}
//! }
//!
//! impl AnimationDriver for Host {
//!     fn begin_transition(&mut self, _transition: Transition) -> AnimationHandle {
//!         self.next_token += 1;
//!         let handle = AnimationHandle::new(self.next_token);
//!         self.transition = Some(handle);
//!         handle
//!     }
//!     fn cancel_transition(&mut self, _handle: AnimationHandle) {}
//! }
//!
//! impl TimerService for Host {
//!     fn schedule_timer(&mut self, _after_seconds: f64) -> TimerHandle {
//!         self.next_token += 1;
//!         let handle = TimerHandle::new(self.next_token);
//!         self.timer = Some(handle);
//!         handle
//!     }
//!     fn cancel_timer(&mut self, _handle: TimerHandle) {}
//! }
//!
//! let mut host = Host::default();
//! let registry = PresenterRegistry::new();
//! let controller = PresentationController::new(
//!     Content::new(Text::from("Saved")),
//!     Configuration::default(),
//!     &registry,
//! );
//!
//! controller.present(&mut host);
//! assert!(controller.is_presented());
//!
//! // The show transition completes naturally, arming the dismiss timer…
//! let shown = host.transition.take().unwrap();
//! controller.animation_ended(&mut host, shown, TransitionEnd::Completed);
//!
//! // …whose fire dismisses; the dismiss completion tears everything down.
//! let timer = host.timer.take().unwrap();
//! controller.timer_fired(&mut host, timer);
//! let hidden = host.transition.take().unwrap();
//! controller.animation_ended(&mut host, hidden, TransitionEnd::Completed);
//!
//! assert!(!controller.is_presented());
//! assert!(registry.is_empty());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`); enable `std` (default)
//! or `libm` for float math.

#![no_std]

extern crate alloc;

mod math;

pub mod config;
pub mod controller;
pub mod easing;
pub mod env;
pub mod geometry;
pub mod registry;
pub mod theme;

pub use config::{Action, Configuration, ConfigurationBuilder, DEFAULT_DURATION};
pub use controller::{PointerPhase, PresentationController};
pub use env::{PresentationEnv, Transition, TransitionCurve, TransitionEnd};
pub use registry::{PresenterId, PresenterRegistry};
pub use theme::{FontSpec, FontWeight, Theme, ThemeBuilder};
