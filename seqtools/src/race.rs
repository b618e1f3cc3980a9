//! [`Race`] future.
use core::fmt::Debug;
use core::pin::Pin;
use core::task::{Context, Poll, ready};

use futures_util::stream::{FuturesUnordered, StreamExt};

use crate::verdict::{self, Verdict};

/// [`Future`] which drives a set of units concurrently and resolves `true` as soon as any unit reports a match.
///
/// A unit which reports `false` or an error is a non-match. If every unit is a non-match the race resolves `false`,
/// so an empty race resolves `false` immediately. Individual unit errors are never surfaced.
///
/// Once decided, the remaining units are dropped, cancelling them at their next suspension point.
#[must_use = "futures do nothing unless polled"]
pub struct Race<Fut> {
    units: FuturesUnordered<Fut>,
}

impl<Fut> Race<Fut>
where
    Fut: Future,
{
    /// Create a race between all of `units`. Units are not polled until the race is.
    pub fn new<I>(units: I) -> Self
    where
        I: IntoIterator<Item = Fut>,
    {
        Self {
            units: units.into_iter().collect(),
        }
    }

    /// Number of units still in flight.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// If no units are in flight.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<Fut> Future for Race<Fut>
where
    Fut: Future,
    Fut::Output: Verdict,
    <Fut::Output as Verdict>::Error: Debug,
{
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        while let Some(output) = ready!(this.units.poll_next_unpin(cx)) {
            if verdict::matched(output) {
                tracing::debug!(dropped = this.units.len(), "Race decided.");
                this.units.clear();
                return Poll::Ready(true);
            }
        }
        Poll::Ready(false)
    }
}
