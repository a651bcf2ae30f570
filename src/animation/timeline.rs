use std::collections::HashMap;
use std::time::Duration;

use super::{
    Animatable, AnimationExecutor, AnimationRequest, Completion, Curve, Keyframe, SpringConfig,
    SpringState, Track,
};
use crate::card::CardId;
use crate::direction::SwipeDirection;
use crate::transform::Transform;

/// The on-screen values of a card while it is animating.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Presentation {
    pub transform: Option<Transform>,
    overlay_alpha: [Option<f32>; 4],
}

impl Presentation {
    /// Animated alpha of the overlay for `direction`, if one is animating.
    pub fn overlay_alpha(&self, direction: SwipeDirection) -> Option<f32> {
        self.overlay_alpha[direction.index()]
    }

    fn apply(&mut self, track: &Track, t: f32) {
        match *track {
            Track::Transform { from, to } => {
                self.transform = Some(Transform::lerp(&from, &to, t));
            }
            Track::OverlayAlpha {
                direction,
                from,
                to,
            } => {
                self.overlay_alpha[direction.index()] = Some(f32::lerp(&from, &to, t));
            }
        }
    }
}

struct ActiveRequest {
    request: AnimationRequest,
    elapsed: Duration,
    spring: Option<(SpringConfig, SpringState)>,
    cancelled: bool,
}

impl ActiveRequest {
    fn new(request: AnimationRequest) -> Self {
        let spring = match request.curve {
            Curve::Spring { damping } => Some((
                SpringConfig::from_damping_ratio(damping, request.duration),
                SpringState::new(),
            )),
            Curve::Timing(_) => None,
        };
        Self {
            request,
            elapsed: Duration::ZERO,
            spring,
            cancelled: false,
        }
    }

    /// Progress of the whole request in [0, 1], or `None` while delayed.
    fn progress(&self) -> Option<f32> {
        let local = self.elapsed.checked_sub(self.request.delay)?;
        if self.request.duration.is_zero() {
            return Some(1.0);
        }
        Some((local.as_secs_f32() / self.request.duration.as_secs_f32()).min(1.0))
    }

    fn keyframe_value(&mut self, keyframe: &Keyframe, progress: f32) -> f32 {
        if progress >= 1.0 {
            return 1.0;
        }
        if let Some((config, state)) = self.spring.as_mut() {
            let local = self.elapsed.saturating_sub(self.request.delay);
            return state.step(local.as_secs_f32(), config);
        }

        let local = if keyframe.relative_duration <= 0.0 {
            if progress >= keyframe.relative_start {
                1.0
            } else {
                0.0
            }
        } else {
            (progress - keyframe.relative_start) / keyframe.relative_duration
        };
        match self.request.curve {
            Curve::Timing(timing) => timing.evaluate(local),
            Curve::Spring { .. } => local.clamp(0.0, 1.0),
        }
    }
}

/// A deterministic, host-clocked [`AnimationExecutor`].
///
/// The host calls [`Timeline::advance`] once per frame with the frame time,
/// renders each card using [`Timeline::presentation`] when present (falling
/// back to the card's model values otherwise) and passes the returned
/// completions to the card stack.
#[derive(Default)]
pub struct Timeline {
    active: Vec<ActiveRequest>,
    presentation: HashMap<CardId, Presentation>,
    pending: Vec<(Completion, bool)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of requests still running (including those waiting out a delay).
    pub fn active_requests(&self) -> usize {
        self.active.len()
    }

    pub fn presentation(&self, card: CardId) -> Option<&Presentation> {
        self.presentation.get(&card)
    }

    /// Advance every running request by `dt` and return the completions of
    /// the requests that ended, with `true` when they ran to the end.
    pub fn advance(&mut self, dt: Duration) -> Vec<(Completion, bool)> {
        let mut finished = std::mem::take(&mut self.pending);
        let mut still_active = Vec::with_capacity(self.active.len());

        for mut active in std::mem::take(&mut self.active) {
            active.elapsed += dt;
            let Some(progress) = active.progress() else {
                still_active.push(active);
                continue;
            };

            let keyframes = active.request.keyframes.clone();
            for keyframe in &keyframes {
                let t = active.keyframe_value(keyframe, progress);
                self.presentation
                    .entry(keyframe.card)
                    .or_default()
                    .apply(&keyframe.track, t);
            }

            if progress >= 1.0 {
                log::trace!(
                    "animation finished after {:?} ({} keyframes)",
                    active.elapsed,
                    keyframes.len()
                );
                if let Some(completion) = active.request.completion {
                    finished.push((completion, !active.cancelled));
                }
            } else {
                still_active.push(active);
            }
        }

        self.active = still_active;
        self.prune_presentation();
        finished
    }

    /// Drop presentation values of cards no running request targets anymore.
    fn prune_presentation(&mut self) {
        let active = &self.active;
        self.presentation
            .retain(|card, _| active.iter().any(|a| a.request.targets(*card)));
    }
}

impl AnimationExecutor for Timeline {
    fn submit(&mut self, request: AnimationRequest) {
        log::trace!(
            "animation submitted: duration {:?}, delay {:?}, {} keyframes",
            request.duration,
            request.delay,
            request.keyframes.len()
        );
        self.active.push(ActiveRequest::new(request));
    }

    fn cancel(&mut self, card: CardId) {
        let mut remaining = Vec::with_capacity(self.active.len());
        for mut active in std::mem::take(&mut self.active) {
            if !active.request.targets(card) {
                remaining.push(active);
                continue;
            }
            active
                .request
                .keyframes
                .retain(|keyframe| keyframe.card != card);
            active.cancelled = true;
            if active.request.keyframes.is_empty() {
                if let Some(completion) = active.request.completion {
                    self.pending.push((completion, false));
                }
            } else {
                remaining.push(active);
            }
        }
        self.active = remaining;
        self.presentation.remove(&card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;
    use crate::geometry::Vec2;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn slide(to: f32) -> Track {
        Track::Transform {
            from: Transform::IDENTITY,
            to: Transform::translate(Vec2::new(to, 0.0)),
        }
    }

    #[test]
    fn test_linear_keyframe_progress() {
        let card = CardId::next();
        let mut timeline = Timeline::new();
        timeline.submit(
            AnimationRequest::new(Duration::from_millis(100))
                .keyframe(Keyframe::full(card, slide(100.0)))
                .on_complete(Completion::CardSwipe(card)),
        );

        assert!(timeline.advance(Duration::from_millis(50)).is_empty());
        let transform = timeline.presentation(card).unwrap().transform.unwrap();
        assert!(approx_eq(transform.translate.x, 50.0));

        let finished = timeline.advance(Duration::from_millis(50));
        assert_eq!(finished, vec![(Completion::CardSwipe(card), true)]);
        assert!(!timeline.is_animating());
        assert!(timeline.presentation(card).is_none());
    }

    #[test]
    fn test_relative_keyframe_windows() {
        let card = CardId::next();
        let mut timeline = Timeline::new();
        timeline.submit(
            AnimationRequest::new(Duration::from_millis(100))
                .keyframe(Keyframe::new(
                    card,
                    Track::OverlayAlpha {
                        direction: SwipeDirection::Left,
                        from: 0.0,
                        to: 1.0,
                    },
                    0.0,
                    0.2,
                ))
                .keyframe(Keyframe::new(card, slide(100.0), 0.2, 0.8)),
        );

        timeline.advance(Duration::from_millis(10));
        let presentation = timeline.presentation(card).unwrap();
        assert!(approx_eq(presentation.overlay_alpha(SwipeDirection::Left).unwrap(), 0.5));
        assert!(approx_eq(presentation.transform.unwrap().translate.x, 0.0));

        timeline.advance(Duration::from_millis(50));
        let presentation = timeline.presentation(card).unwrap();
        assert!(approx_eq(presentation.overlay_alpha(SwipeDirection::Left).unwrap(), 1.0));
        assert!(approx_eq(presentation.transform.unwrap().translate.x, 50.0));
    }

    #[test]
    fn test_delay_and_timer_requests() {
        let mut timeline = Timeline::new();
        timeline.submit(
            AnimationRequest::new(Duration::from_millis(100))
                .delay(Duration::from_millis(50))
                .on_complete(Completion::Stack(7)),
        );

        assert!(timeline.advance(Duration::from_millis(100)).is_empty());
        assert_eq!(
            timeline.advance(Duration::from_millis(50)),
            vec![(Completion::Stack(7), true)]
        );
    }

    #[test]
    fn test_cancel_reports_unfinished() {
        let card = CardId::next();
        let mut timeline = Timeline::new();
        timeline.submit(
            AnimationRequest::new(Duration::from_millis(100))
                .curve(Curve::Timing(TimingFunction::EaseOut))
                .keyframe(Keyframe::full(card, slide(10.0)))
                .on_complete(Completion::CardReverseSwipe(card)),
        );
        timeline.advance(Duration::from_millis(10));
        timeline.cancel(card);

        assert!(timeline.presentation(card).is_none());
        assert_eq!(
            timeline.advance(Duration::from_millis(10)),
            vec![(Completion::CardReverseSwipe(card), false)]
        );
    }

    #[test]
    fn test_spring_lands_on_target() {
        let card = CardId::next();
        let mut timeline = Timeline::new();
        timeline.submit(
            AnimationRequest::new(Duration::from_millis(600))
                .curve(Curve::Spring { damping: 0.5 })
                .keyframe(Keyframe::full(card, slide(100.0))),
        );
        for _ in 0..35 {
            timeline.advance(Duration::from_millis(16));
        }
        assert!(timeline.is_animating());
        timeline.advance(Duration::from_millis(100));
        assert!(!timeline.is_animating());
    }
}
