/// Fraction of a heading that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Class added to a heading once it has scrolled into view.
pub const REVEAL_CLASS: &str = "reveal";

/// One-way latch behind the scroll reveal animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one visibility notification into the latch.
    ///
    /// Returns `true` only for the notification that flips it, later
    /// notifications (visible or not) leave it revealed and return `false`.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Like [`Reveal::observe`], and runs `stop` on the flip so the caller can
    /// release its observer; nothing after the reveal can change the latch.
    pub fn observe_then_stop(&mut self, is_intersecting: bool, stop: impl FnOnce()) -> bool {
        let flipped = self.observe(is_intersecting);
        if flipped {
            stop();
        }
        flipped
    }
}
