//! Modal dialog visibility.
//!
//! The modal fades in and out with a CSS transition on its `show` class.
//! Showing needs `display: flex` one tick before `show` is added, and
//! hiding needs `show` removed before `display: none`, so the machine has
//! two transitional phases between hidden and shown.

use crate::config::Timings;

/// Class that drives the opacity transition.
pub const SHOW_CLASS: &str = "show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// `display: none`, no `show` class.
    Hidden,
    /// `display: flex`, waiting one tick before adding `show`.
    Opening,
    /// `display: flex` with `show`.
    Shown,
    /// `show` removed, waiting for the transition before hiding.
    Closing,
}

/// Pending completion of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTimer {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    phase: ModalPhase,
    generation: u64,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Hidden,
            generation: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the user asked for the modal to be visible.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Shown)
    }

    /// Value for the inline `display` property.
    pub fn display(&self) -> &'static str {
        match self.phase {
            ModalPhase::Hidden => "none",
            _ => "flex",
        }
    }

    pub fn has_show_class(&self) -> bool {
        self.phase == ModalPhase::Shown
    }

    /// Flip between open and closed. The returned timer must be fed back
    /// to [`Modal::settle`] once its delay has elapsed.
    pub fn toggle(&mut self, timings: &Timings) -> ModalTimer {
        self.generation += 1;
        let delay_ms = if self.is_open() {
            self.phase = ModalPhase::Closing;
            timings.modal_hide_ms
        } else {
            self.phase = ModalPhase::Opening;
            timings.modal_show_ms
        };
        tracing::debug!(phase = ?self.phase, generation = self.generation, "modal toggled");
        ModalTimer {
            generation: self.generation,
            delay_ms,
        }
    }

    /// Backdrop click. Acts like [`Modal::toggle`] whenever the backdrop is
    /// on screen, so a click during the closing fade reopens the modal.
    /// A hidden modal has no backdrop to click.
    pub fn dismiss(&mut self, timings: &Timings) -> Option<ModalTimer> {
        if self.phase == ModalPhase::Hidden {
            return None;
        }
        Some(self.toggle(timings))
    }

    /// Finish the transitional phase started by the toggle with
    /// `generation`. Stale timers are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Shown;
                true
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Hidden;
                true
            }
            ModalPhase::Hidden | ModalPhase::Shown => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close() {
        let timings = Timings::default();
        let mut modal = Modal::new();
        assert_eq!(modal.display(), "none");

        let open = modal.toggle(&timings);
        assert_eq!(open.delay_ms, 10);
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert_eq!(modal.display(), "flex");
        assert!(!modal.has_show_class());

        assert!(modal.settle(open.generation));
        assert!(modal.has_show_class());

        let close = modal.toggle(&timings);
        assert_eq!(close.delay_ms, 300);
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(!modal.has_show_class());
        assert_eq!(modal.display(), "flex");

        assert!(modal.settle(close.generation));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
        assert_eq!(modal.display(), "none");
    }

    #[test]
    fn test_reopen_while_closing_ignores_hide_timer() {
        let timings = Timings::default();
        let mut modal = Modal::new();
        let open = modal.toggle(&timings);
        modal.settle(open.generation);
        let close = modal.toggle(&timings);
        let reopen = modal.toggle(&timings);

        assert!(!modal.settle(close.generation));
        assert_eq!(modal.display(), "flex");
        assert!(modal.settle(reopen.generation));
        assert_eq!(modal.phase(), ModalPhase::Shown);
    }

    #[test]
    fn test_close_while_opening() {
        let timings = Timings::default();
        let mut modal = Modal::new();
        let open = modal.toggle(&timings);
        assert!(modal.is_open());
        let close = modal.toggle(&timings);
        assert!(!modal.settle(open.generation));
        assert!(!modal.has_show_class());
        assert!(modal.settle(close.generation));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
    }

    #[test]
    fn test_dismiss_closes_shown_modal() {
        let timings = Timings::default();
        let mut modal = Modal::new();
        assert_eq!(modal.dismiss(&timings), None);

        let open = modal.toggle(&timings);
        modal.settle(open.generation);
        let close = modal.dismiss(&timings).unwrap();
        assert_eq!(close.delay_ms, 300);
        assert_eq!(modal.phase(), ModalPhase::Closing);
    }

    #[test]
    fn test_dismiss_during_closing_reopens() {
        let timings = Timings::default();
        let mut modal = Modal::new();
        let open = modal.toggle(&timings);
        modal.settle(open.generation);
        let close = modal.toggle(&timings);

        let reopen = modal.dismiss(&timings).unwrap();
        assert_eq!(reopen.delay_ms, 10);
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert!(!modal.settle(close.generation));
        assert!(modal.settle(reopen.generation));
        assert_eq!(modal.phase(), ModalPhase::Shown);
    }
}
