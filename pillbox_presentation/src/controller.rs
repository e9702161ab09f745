// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation controller.
//!
//! [`PresentationController`] owns one indicator's full lifecycle: the show
//! transition, the auto-dismiss timer, drag tracking with rubber-banding and
//! spring snapping, programmatic dismissal, and teardown. It drives the host
//! through the [`crate::env`] capability traits and receives timer fires,
//! transition completions, taps, and pointer events back as method calls on
//! the same thread.
//!
//! ## Event ordering and cancellation discipline
//!
//! There are no locks; correctness rests on four rules, each enforced in one
//! place:
//!
//! 1. At most one transition is in flight. [`Self::start_transition`] always
//!    cancels the previous one first, so show and dismiss can never race.
//! 2. At most one timer is pending. Re-arming cancels the previous handle
//!    first (last-write-wins).
//! 3. Every completion is checked against the stored handle. Completions of
//!    superseded transitions and cancelled timers are no-ops, even when the
//!    host delivers them late.
//! 4. No borrow of controller state is held across a callback or an
//!    environment call, so callbacks may re-enter the controller (a tap
//!    handler calling [`Self::dismiss`], for example).
//!
//! The auto-dismiss timer is armed only while the indicator is settled:
//! registered, interaction enabled, no drag in progress, no dismissal in
//! flight. [`Self::rearm_dismiss_timer`] checks this in one place, so no
//! call site can violate the invariant.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use kurbo::Point;
use pillbox_content::Content;

use crate::config::{Action, Configuration};
use crate::easing::rubber_band;
use crate::env::{
    AnimationHandle, PresentationEnv, TimerHandle, Transition, TransitionCurve, TransitionEnd,
};
use crate::geometry::{
    SNAP_DAMPING, SNAP_INITIAL_VELOCITY, TRANSITION_DURATION, off_screen_center, on_screen_center,
};
use crate::registry::{PresenterId, PresenterRegistry};

/// Phases of a pointer drag, as delivered by the host's gesture source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The touch settled into a drag.
    Began,
    /// The touch moved.
    Changed,
    /// The touch lifted.
    Ended,
    /// The system cancelled the gesture.
    Cancelled,
    /// The gesture failed to complete.
    Failed,
}

/// What a finished transition was doing, deciding its completion effects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TransitionRole {
    /// Animating in; completion fires `appeared` and arms the timer.
    Show,
    /// Springing back after an aborted drag; the timer was already re-armed.
    SnapVisible,
    /// Animating out; completion finalizes the dismissal.
    Dismiss,
}

/// The single in-flight transition, if any.
#[derive(Copy, Clone, Debug)]
struct ActiveTransition {
    handle: AnimationHandle,
    role: TransitionRole,
    to: Point,
}

struct ControllerState {
    content: Content,
    config: Configuration,
    /// Current center of the indicator in host coordinates.
    center: Point,
    /// Settled target, recomputed before every animated transition.
    on_screen: Point,
    /// Hidden target, recomputed before every animated transition.
    off_screen: Point,
    interaction_enabled: bool,
    active: Option<ActiveTransition>,
    dismiss_timer: Option<TimerHandle>,
    /// Touch point where the current drag began.
    drag_origin: Option<Point>,
}

/// Manages the presentation of one indicator.
///
/// The controller is a cheap-to-clone handle over shared state; the clone
/// the registry holds during presentation keeps that state alive even if
/// the caller drops every handle of its own.
///
/// See the [crate docs](crate) for a worked example.
#[derive(Clone)]
pub struct PresentationController {
    id: PresenterId,
    registry: PresenterRegistry,
    state: Rc<RefCell<ControllerState>>,
}

impl PresentationController {
    /// Creates a controller for `content`, not yet presented.
    ///
    /// The `registry` tracks the presentation once [`Self::present`] is
    /// called; pass the same registry to every controller in the process.
    #[must_use]
    pub fn new(
        content: Content,
        configuration: Configuration,
        registry: &PresenterRegistry,
    ) -> Self {
        Self {
            id: PresenterId::next(),
            registry: registry.clone(),
            state: Rc::new(RefCell::new(ControllerState {
                content,
                config: configuration,
                center: Point::ZERO,
                on_screen: Point::ZERO,
                off_screen: Point::ZERO,
                interaction_enabled: false,
                active: None,
                dismiss_timer: None,
                drag_origin: None,
            })),
        }
    }

    /// This controller's registry key.
    #[must_use]
    #[inline]
    pub fn id(&self) -> PresenterId {
        self.id
    }

    /// The contents being presented.
    #[must_use]
    pub fn content(&self) -> Content {
        self.state.borrow().content.clone()
    }

    /// The controller's configuration.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.state.borrow().config.clone()
    }

    /// Returns `true` while this controller is registered as presented.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.registry.contains(self.id)
    }

    /// Current center of the indicator in host coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.state.borrow().center
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().drag_origin.is_some()
    }

    /// Presents the indicator on the host surface.
    ///
    /// A no-op while already presented: calling `present` twice in a row
    /// yields one registry entry and one show transition. Otherwise the
    /// indicator is attached off screen and animated to its settled
    /// position; when that transition reaches its natural end, the
    /// `appeared` callback fires and the auto-dismiss timer is armed.
    pub fn present(&self, env: &mut dyn PresentationEnv) {
        if !self.registry.insert_if_absent(self.id, self.clone()) {
            return;
        }

        env.attach_indicator();
        env.set_interaction_enabled(true);
        self.state.borrow_mut().interaction_enabled = true;

        let (off_screen, on_screen) = self.refresh_positions(env);
        self.state.borrow_mut().center = off_screen;
        env.set_indicator_center(off_screen);

        self.start_transition(
            env,
            TransitionRole::Show,
            Transition {
                to: on_screen,
                duration: TRANSITION_DURATION,
                curve: TransitionCurve::EaseInOut,
            },
        );
    }

    /// Dismisses the indicator.
    ///
    /// Disarms the timer, disables interaction, and animates from the
    /// current position to the off-screen target; teardown (the `dismissed`
    /// callback, detaching, unregistering) happens when that transition
    /// reaches its natural end. Calling again mid-dismiss restarts the
    /// animation; calling on a controller that is not presented is a no-op.
    pub fn dismiss(&self, env: &mut dyn PresentationEnv) {
        if !self.is_presented() {
            return;
        }

        self.disarm_dismiss_timer(env);
        self.state.borrow_mut().interaction_enabled = false;
        env.set_interaction_enabled(false);

        let (off_screen, _) = self.refresh_positions(env);
        self.start_transition(
            env,
            TransitionRole::Dismiss,
            Transition {
                to: off_screen,
                duration: TRANSITION_DURATION,
                curve: TransitionCurve::EaseInOut,
            },
        );
    }

    /// Delivers a tap on the indicator.
    ///
    /// Invokes the `tap` callback; tapping does not itself dismiss. Ignored
    /// while interaction is disabled.
    pub fn tap(&self, env: &mut dyn PresentationEnv) {
        if !self.state.borrow().interaction_enabled {
            return;
        }
        // Bind first: the state borrow must end before the callback runs.
        let action = self.state.borrow().config.tap();
        self.emit(env, action);
    }

    /// Delivers a pointer hover entering the indicator.
    ///
    /// Hovering pauses the auto-dismiss timer until the pointer leaves.
    pub fn pointer_entered(&self, env: &mut dyn PresentationEnv) {
        if !self.state.borrow().interaction_enabled {
            return;
        }
        self.disarm_dismiss_timer(env);
    }

    /// Delivers a pointer hover leaving the indicator.
    pub fn pointer_exited(&self, env: &mut dyn PresentationEnv) {
        if !self.state.borrow().interaction_enabled {
            return;
        }
        self.rearm_dismiss_timer(env);
    }

    /// Delivers one phase of a drag gesture at `position` (host coordinates).
    ///
    /// While dragging, the indicator follows the vertical displacement from
    /// the drag origin through the rubber-band easing. Release with net
    /// upward displacement dismisses (spring to hidden, then the same
    /// teardown as [`Self::dismiss`]); otherwise the indicator springs back
    /// and the auto-dismiss timer is re-armed. Ignored while interaction is
    /// disabled.
    pub fn pointer(&self, env: &mut dyn PresentationEnv, phase: PointerPhase, position: Point) {
        if !self.state.borrow().interaction_enabled {
            return;
        }

        match phase {
            PointerPhase::Began => {
                self.disarm_dismiss_timer(env);
                // The drag takes over positioning; halt any in-flight
                // transition rather than fight it.
                let previous = self.state.borrow_mut().active.take();
                if let Some(previous) = previous {
                    env.cancel_transition(previous.handle);
                }
                self.state.borrow_mut().drag_origin = Some(position);
            }
            PointerPhase::Changed => {
                let new_center = {
                    let state = self.state.borrow();
                    let Some(origin) = state.drag_origin else {
                        return;
                    };
                    let ease = rubber_band(position.y - origin.y);
                    Point::new(
                        state.center.x,
                        state.on_screen.y + state.on_screen.y * ease,
                    )
                };
                self.state.borrow_mut().center = new_center;
                env.set_indicator_center(new_center);
            }
            PointerPhase::Ended | PointerPhase::Cancelled | PointerPhase::Failed => {
                let Some(origin) = self.state.borrow_mut().drag_origin.take() else {
                    return;
                };
                if position.y - origin.y < 0.0 {
                    self.snap_hidden(env, true);
                } else {
                    self.rearm_dismiss_timer(env);
                    self.snap_visible(env, true);
                }
            }
        }
    }

    /// Delivers the end of the transition identified by `handle`.
    ///
    /// Stale handles — superseded or cancelled transitions — are ignored, as
    /// are interrupted ends. A natural end settles the indicator at the
    /// target and runs the transition's completion effects.
    pub fn animation_ended(
        &self,
        env: &mut dyn PresentationEnv,
        handle: AnimationHandle,
        end: TransitionEnd,
    ) {
        let finished = {
            let mut state = self.state.borrow_mut();
            if state.active.is_some_and(|active| active.handle == handle) {
                state.active.take()
            } else {
                None
            }
        };
        let Some(finished) = finished else {
            return;
        };
        if end == TransitionEnd::Interrupted {
            return;
        }

        self.state.borrow_mut().center = finished.to;
        env.set_indicator_center(finished.to);

        match finished.role {
            TransitionRole::Show => {
                let action = self.state.borrow().config.appeared();
                self.emit(env, action);
                // No-op if the callback already started a dismissal.
                self.rearm_dismiss_timer(env);
            }
            TransitionRole::SnapVisible => {}
            TransitionRole::Dismiss => self.finalize_dismiss(env),
        }
    }

    /// Delivers the fire of the timer identified by `handle`.
    ///
    /// A stale handle is ignored; the pending timer's fire dismisses.
    pub fn timer_fired(&self, env: &mut dyn PresentationEnv, handle: TimerHandle) {
        let live = {
            let mut state = self.state.borrow_mut();
            if state.dismiss_timer == Some(handle) {
                state.dismiss_timer = None;
                true
            } else {
                false
            }
        };
        if live {
            self.dismiss(env);
        }
    }

    /// Recomputes both position targets from current host and indicator
    /// sizes, returning `(off_screen, on_screen)`.
    fn refresh_positions(&self, env: &mut dyn PresentationEnv) -> (Point, Point) {
        let host = env.host_size();
        let indicator = env.indicator_size();
        let off_screen = off_screen_center(host, indicator);
        let on_screen = on_screen_center(host, indicator);

        let mut state = self.state.borrow_mut();
        state.off_screen = off_screen;
        state.on_screen = on_screen;
        (off_screen, on_screen)
    }

    /// Begins a transition, cancelling whichever one was in flight.
    fn start_transition(
        &self,
        env: &mut dyn PresentationEnv,
        role: TransitionRole,
        transition: Transition,
    ) {
        let previous = self.state.borrow_mut().active.take();
        if let Some(previous) = previous {
            env.cancel_transition(previous.handle);
        }
        let handle = env.begin_transition(transition);
        self.state.borrow_mut().active = Some(ActiveTransition {
            handle,
            role,
            to: transition.to,
        });
    }

    /// Springs (or jumps) the indicator to the hidden position; a natural
    /// completion finalizes the dismissal.
    fn snap_hidden(&self, env: &mut dyn PresentationEnv, animated: bool) {
        let (off_screen, _) = self.refresh_positions(env);
        self.snap(env, TransitionRole::Dismiss, off_screen, animated);
    }

    /// Springs (or jumps) the indicator back to the settled position.
    fn snap_visible(&self, env: &mut dyn PresentationEnv, animated: bool) {
        let (_, on_screen) = self.refresh_positions(env);
        self.snap(env, TransitionRole::SnapVisible, on_screen, animated);
    }

    fn snap(&self, env: &mut dyn PresentationEnv, role: TransitionRole, to: Point, animated: bool) {
        if animated {
            self.start_transition(
                env,
                role,
                Transition {
                    to,
                    duration: TRANSITION_DURATION,
                    curve: TransitionCurve::Spring {
                        damping: SNAP_DAMPING,
                        initial_velocity: SNAP_INITIAL_VELOCITY,
                    },
                },
            );
        } else {
            self.state.borrow_mut().center = to;
            env.set_indicator_center(to);
        }
    }

    /// Cancels the pending auto-dismiss timer, if any. Safe to call
    /// redundantly.
    fn disarm_dismiss_timer(&self, env: &mut dyn PresentationEnv) {
        let pending = self.state.borrow_mut().dismiss_timer.take();
        if let Some(pending) = pending {
            env.cancel_timer(pending);
        }
    }

    /// Arms a fresh auto-dismiss timer, cancelling any pending one first.
    ///
    /// The timer is armed only while the indicator is settled: registered,
    /// interaction enabled, no drag in progress, no dismissal in flight.
    fn rearm_dismiss_timer(&self, env: &mut dyn PresentationEnv) {
        self.disarm_dismiss_timer(env);

        let (eligible, duration) = {
            let state = self.state.borrow();
            let dismissing = matches!(
                state.active,
                Some(ActiveTransition {
                    role: TransitionRole::Dismiss,
                    ..
                })
            );
            (
                self.registry.contains(self.id)
                    && state.interaction_enabled
                    && state.drag_origin.is_none()
                    && !dismissing,
                state.config.duration(),
            )
        };

        if eligible {
            let handle = env.schedule_timer(duration);
            self.state.borrow_mut().dismiss_timer = Some(handle);
        }
    }

    /// The single teardown routine, reached from both the programmatic
    /// dismiss transition and a drag-dismiss snap.
    ///
    /// Fires the `dismissed` callback, releases any timer and transition
    /// handle, detaches the indicator, and removes this controller from the
    /// registry. Every release is a no-op when nothing is pending.
    fn finalize_dismiss(&self, env: &mut dyn PresentationEnv) {
        let action = self.state.borrow().config.dismissed();
        self.emit(env, action);

        self.disarm_dismiss_timer(env);
        let lingering = self.state.borrow_mut().active.take();
        if let Some(lingering) = lingering {
            env.cancel_transition(lingering.handle);
        }
        self.state.borrow_mut().drag_origin = None;

        env.detach_indicator();
        self.registry.remove(self.id);
    }

    /// Invokes a callback with no state borrow held, so it may re-enter.
    fn emit(&self, env: &mut dyn PresentationEnv, action: Option<Action>) {
        if let Some(action) = action {
            action(self, env);
        }
    }
}

impl fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PresentationController")
            .field("id", &self.id)
            .field("presented", &self.registry.contains(self.id))
            .field("center", &state.center)
            .field("interaction_enabled", &state.interaction_enabled)
            .field("dragging", &state.drag_origin.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillbox_content::Text;

    fn controller() -> (PresenterRegistry, PresentationController) {
        let registry = PresenterRegistry::new();
        let controller = PresentationController::new(
            Content::new(Text::from("Title")),
            Configuration::default(),
            &registry,
        );
        (registry, controller)
    }

    #[test]
    fn a_new_controller_is_not_presented() {
        let (registry, controller) = controller();
        assert!(!controller.is_presented());
        assert!(!controller.is_dragging());
        assert!(registry.is_empty());
    }

    #[test]
    fn controllers_get_distinct_ids() {
        let registry = PresenterRegistry::new();
        let a = PresentationController::new(
            Content::new(Text::from("A")),
            Configuration::default(),
            &registry,
        );
        let b = PresentationController::new(
            Content::new(Text::from("B")),
            Configuration::default(),
            &registry,
        );
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clones_share_identity_and_state() {
        let (_registry, controller) = controller();
        let clone = controller.clone();
        assert_eq!(controller.id(), clone.id());
        assert_eq!(controller.center(), clone.center());
    }

    #[test]
    fn content_and_configuration_are_readable() {
        let (_registry, controller) = controller();
        assert_eq!(controller.content().title().value, "Title");
        assert_eq!(controller.configuration().duration(), 3.0);
    }
}
