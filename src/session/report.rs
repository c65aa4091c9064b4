//! Handing a confirmed winner back to the league.

use crate::core::PlayerId;

/// Receives the confirmed winner of a life-counter game.
///
/// The league implements this to accumulate scores. Any `FnMut(PlayerId)`
/// closure is a reporter.
pub trait MatchReporter {
    /// Record a win for `winner`.
    fn record_win(&mut self, winner: PlayerId);
}

impl<F> MatchReporter for F
where
    F: FnMut(PlayerId),
{
    fn record_win(&mut self, winner: PlayerId) {
        self(winner)
    }
}
