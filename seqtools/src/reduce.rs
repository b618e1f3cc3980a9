//! [`ReduceTrace`], [`reduce`], and related items.
use core::pin::Pin;
use core::task::{Context, Poll, ready};

use futures_util::stream::{BoxStream, FusedStream, Stream, StreamExt};
use futures_util::{TryFuture, TryFutureExt};
use pin_project_lite::pin_project;

use crate::{Entries, Sequence, entries};

/// Folds `seq` into a single accumulator with `step(accum, item, index)`.
///
/// Steps run strictly in order, one at a time. An empty sequence returns `init` unchanged. If a step fails, the fold
/// stops immediately and nothing further is pulled from `seq`.
pub async fn reduce<T, Accum, Func, Fut>(
    init: Accum,
    mut step: Func,
    seq: Sequence<'_, T>,
) -> Result<Accum, Fut::Error>
where
    Func: FnMut(Accum, T, usize) -> Fut,
    Fut: TryFuture<Ok = Accum>,
{
    let mut accum = init;
    match entries(seq) {
        Sequence::Array(items) => {
            for (index, item) in items {
                accum = TryFutureExt::into_future(step(accum, item, index)).await?;
            }
        }
        Sequence::Iter(iter) => {
            for (index, item) in iter {
                accum = TryFutureExt::into_future(step(accum, item, index)).await?;
            }
        }
        Sequence::Stream(mut stream) => {
            while let Some((index, item)) = stream.next().await {
                accum = TryFutureExt::into_future(step(accum, item, index)).await?;
            }
        }
    }
    Ok(accum)
}

pin_project! {
    /// Stream of every intermediate accumulator of a fold: `init` first, then the accumulator after each item.
    ///
    /// If a step fails, the error is yielded after the accumulators of all prior steps and the stream ends.
    #[must_use = "streams do nothing unless polled"]
    pub struct ReduceTrace<St, Accum, Func, Fut> {
        #[pin]
        stream: Entries<St>,
        step: Func,
        // `Some` between steps, `None` while a step is pending or once done.
        accum: Option<Accum>,
        #[pin]
        pending: Option<Fut>,
        init_yielded: bool,
        done: bool,
    }
}

impl<St, Accum, Func, Fut> ReduceTrace<St, Accum, Func, Fut>
where
    St: Stream,
    Accum: Clone,
    Func: FnMut(Accum, St::Item, usize) -> Fut,
    Fut: TryFuture<Ok = Accum>,
{
    /// Create with initial accumulator `init`, fold function `step`, and source `stream`.
    pub fn new(init: Accum, step: Func, stream: St) -> Self {
        Self {
            stream: Entries::new(stream),
            step,
            accum: Some(init),
            pending: None,
            init_yielded: false,
            done: false,
        }
    }
}

impl<St, Accum, Func, Fut> Stream for ReduceTrace<St, Accum, Func, Fut>
where
    St: Stream,
    Accum: Clone,
    Func: FnMut(Accum, St::Item, usize) -> Fut,
    Fut: TryFuture<Ok = Accum>,
{
    type Item = Result<Accum, Fut::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if !*this.init_yielded {
            *this.init_yielded = true;
            return Poll::Ready(this.accum.clone().map(Ok));
        }

        loop {
            if *this.done {
                return Poll::Ready(None);
            }

            if let Some(fut) = this.pending.as_mut().as_pin_mut() {
                let output = ready!(fut.try_poll(cx));
                this.pending.set(None);
                return Poll::Ready(Some(match output {
                    Ok(accum) => {
                        *this.accum = Some(accum.clone());
                        Ok(accum)
                    }
                    Err(error) => {
                        *this.done = true;
                        Err(error)
                    }
                }));
            }

            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some((index, item)) => {
                    let Some(accum) = this.accum.take() else {
                        *this.done = true;
                        continue;
                    };
                    this.pending.set(Some((this.step)(accum, item, index)));
                }
                None => {
                    *this.accum = None;
                    *this.done = true;
                }
            }
        }
    }
}

impl<St, Accum, Func, Fut> FusedStream for ReduceTrace<St, Accum, Func, Fut>
where
    St: Stream,
    Accum: Clone,
    Func: FnMut(Accum, St::Item, usize) -> Fut,
    Fut: TryFuture<Ok = Accum>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Lazily yields the accumulator trace of folding `seq`. See [`ReduceTrace`].
///
/// The trace has one more element than `seq`, and its last element equals the result of [`reduce`].
pub fn reduce_trace<'a, T, Accum, Func, Fut>(
    init: Accum,
    step: Func,
    seq: Sequence<'a, T>,
) -> ReduceTrace<BoxStream<'a, T>, Accum, Func, Fut>
where
    T: Send + 'a,
    Accum: Clone,
    Func: FnMut(Accum, T, usize) -> Fut,
    Fut: TryFuture<Ok = Accum>,
{
    ReduceTrace::new(init, step, seq.into_stream())
}
