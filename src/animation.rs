//! Per-element animation state machines.
//!
//! Each animated element owns an [`Animator`] that is either idle or
//! running one [`Effect`]. Triggering an effect interrupts whatever is
//! running and returns a [`Replay`] describing the DOM work:
//!
//! 1. remove every class in [`Replay::remove`]
//! 2. force a layout flush
//! 3. apply [`Replay::styling`]
//! 4. after [`Replay::duration_ms`], call [`Animator::expire`] with the
//!    replay's generation and undo the styling if it returns `true`
//!
//! Generations make restarts well defined: the timer from an interrupted
//! run carries an old generation and is ignored, so the new run always
//! lasts its full duration.

use crate::config::Timings;

/// Classes that restart the JS box animation. They never coexist.
pub const BOX_EFFECT_CLASSES: &[&str] = &["pop-animation", "color-cycle"];

/// How an effect is applied to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    /// Add a class, remove it on expiry.
    Class(&'static str),
    /// Set an inline style property, clear it on expiry.
    Inline {
        property: &'static str,
        value: &'static str,
    },
}

/// Timed cosmetic effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Scale pop on the JS box.
    Pop,
    /// Background color cycle on the JS box.
    ColorCycle,
    /// Brief scale-up of a clicked animated box.
    Press,
    /// Pulse on the secondary button.
    Pulse,
}

impl Effect {
    pub fn styling(self) -> Styling {
        match self {
            Effect::Pop => Styling::Class("pop-animation"),
            Effect::ColorCycle => Styling::Class("color-cycle"),
            Effect::Press => Styling::Inline {
                property: "transform",
                value: "scale(1.1)",
            },
            Effect::Pulse => Styling::Inline {
                property: "animation",
                value: "pulse 0.6s ease",
            },
        }
    }

    /// Classes to strip before this effect is applied.
    pub fn conflicts(self) -> &'static [&'static str] {
        match self {
            Effect::Pop | Effect::ColorCycle => BOX_EFFECT_CLASSES,
            Effect::Press | Effect::Pulse => &[],
        }
    }

    pub fn duration_ms(self, timings: &Timings) -> u32 {
        match self {
            Effect::Pop => timings.pop_ms,
            Effect::ColorCycle => timings.color_cycle_ms,
            Effect::Press => timings.press_ms,
            Effect::Pulse => timings.pulse_ms,
        }
    }
}

/// Animator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating { effect: Effect, generation: u64 },
}

/// DOM work for one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub effect: Effect,
    pub generation: u64,
    pub remove: &'static [&'static str],
    pub styling: Styling,
    pub duration_ms: u32,
}

/// Idle/animating state machine for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animator {
    phase: Phase,
    generation: u64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Start `effect`, interrupting any running effect.
    pub fn trigger(&mut self, effect: Effect, timings: &Timings) -> Replay {
        if let Phase::Animating { effect: running, .. } = self.phase {
            tracing::debug!(?running, ?effect, "interrupting running animation");
        }
        self.generation += 1;
        self.phase = Phase::Animating {
            effect,
            generation: self.generation,
        };
        Replay {
            effect,
            generation: self.generation,
            remove: effect.conflicts(),
            styling: effect.styling(),
            duration_ms: effect.duration_ms(timings),
        }
    }

    /// Timer expiry for `generation`. Returns `true` if the element went
    /// back to idle and its styling should be undone.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.phase {
            Phase::Animating {
                generation: current,
                ..
            } if current == generation => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Entrance animations replayed on the result regions.
///
/// These have no expiry: the inline `animation` property is cleared,
/// the layout flushed, and the property re-applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAnimation {
    FadeInUp,
    SlideInLeft,
    BounceIn,
}

impl ResultAnimation {
    /// Value for the inline `animation` property.
    pub fn css(self) -> &'static str {
        match self {
            ResultAnimation::FadeInUp => "fadeInUp 0.5s ease",
            ResultAnimation::SlideInLeft => "slideInLeft 0.5s ease",
            ResultAnimation::BounceIn => "bounceIn 0.6s ease",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_and_expire() {
        let timings = Timings::default();
        let mut animator = Animator::new();
        assert_eq!(animator.phase(), Phase::Idle);

        let replay = animator.trigger(Effect::Pop, &timings);
        assert_eq!(replay.styling, Styling::Class("pop-animation"));
        assert_eq!(replay.remove, BOX_EFFECT_CLASSES);
        assert_eq!(replay.duration_ms, 800);
        assert!(animator.is_animating());

        assert!(animator.expire(replay.generation));
        assert_eq!(animator.phase(), Phase::Idle);
    }

    #[test]
    fn test_restart_ignores_stale_timer() {
        let timings = Timings::default();
        let mut animator = Animator::new();
        let first = animator.trigger(Effect::Pop, &timings);
        let second = animator.trigger(Effect::ColorCycle, &timings);
        assert_ne!(first.generation, second.generation);

        // The pop timer fires while the color cycle is running.
        assert!(!animator.expire(first.generation));
        assert_eq!(
            animator.phase(),
            Phase::Animating {
                effect: Effect::ColorCycle,
                generation: second.generation
            }
        );
        assert!(animator.expire(second.generation));
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut animator = Animator::new();
        let replay = animator.trigger(Effect::Press, &Timings::default());
        assert!(animator.expire(replay.generation));
        assert!(!animator.expire(replay.generation));
    }

    #[test]
    fn test_inline_effects() {
        let timings = Timings::default();
        assert_eq!(Effect::Press.duration_ms(&timings), 200);
        assert_eq!(Effect::Pulse.duration_ms(&timings), 600);
        assert!(Effect::Press.conflicts().is_empty());
        assert_eq!(
            Effect::Pulse.styling(),
            Styling::Inline {
                property: "animation",
                value: "pulse 0.6s ease"
            }
        );
    }

    #[test]
    fn test_result_animation_css() {
        assert_eq!(ResultAnimation::FadeInUp.css(), "fadeInUp 0.5s ease");
        assert_eq!(ResultAnimation::SlideInLeft.css(), "slideInLeft 0.5s ease");
        assert_eq!(ResultAnimation::BounceIn.css(), "bounceIn 0.6s ease");
    }
}
