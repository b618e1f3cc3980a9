//! [`MapLazy`], eager [`map`], and related items.
use core::pin::Pin;
use core::task::{Context, Poll, ready};

use futures_util::future::join_all;
use futures_util::stream::{BoxStream, FusedStream, Stream};
use futures_util::{TryFuture, TryFutureExt};
use pin_project_lite::pin_project;

use crate::Sequence;

/// Applies `func` to every element of `seq` concurrently, returning the outputs in input order.
///
/// Streams and iterators are collected first, so this never returns for an infinite source; use [`map_lazy`] instead.
/// All units are driven to completion before returning. If any failed, the error of the lowest-index failed unit is
/// returned and the successful outputs are discarded.
pub async fn map<T, Func, Fut>(func: Func, seq: Sequence<'_, T>) -> Result<Vec<Fut::Ok>, Fut::Error>
where
    Func: FnMut(T) -> Fut,
    Fut: TryFuture,
{
    let items = seq.collect().await;
    tracing::trace!(units = items.len(), "Mapping concurrently.");
    let settled = join_all(items.into_iter().map(func).map(TryFutureExt::into_future)).await;
    settled.into_iter().collect()
}

/// Same as [`map`] but for a fixed-size array, preserving its length in the output type.
pub async fn map_array<T, Func, Fut, const N: usize>(
    func: Func,
    items: [T; N],
) -> Result<[Fut::Ok; N], Fut::Error>
where
    Func: FnMut(T) -> Fut,
    Fut: TryFuture,
{
    let settled = join_all(items.map(func).map(TryFutureExt::into_future)).await;
    let outputs = settled.into_iter().collect::<Result<Vec<_>, _>>()?;
    Ok(outputs
        .try_into()
        .unwrap_or_else(|_: Vec<_>| unreachable!("`join_all` preserves length")))
}

pin_project! {
    /// Same as [`futures_util::StreamExt::then`], but for fallible futures, and stops after the first error.
    ///
    /// Pulls one item, resolves its future, and yields the output before pulling the next item. After yielding an
    /// `Err`, no more items are pulled from the source.
    #[must_use = "streams do nothing unless polled"]
    pub struct MapLazy<St, Func, Fut> {
        #[pin]
        stream: St,
        func: Func,
        #[pin]
        pending: Option<Fut>,
        // Source ended, or an error was yielded.
        done: bool,
    }
}

impl<St, Func, Fut> MapLazy<St, Func, Fut>
where
    St: Stream,
    Func: FnMut(St::Item) -> Fut,
    Fut: TryFuture,
{
    /// Create with mapping `func` and source `stream`.
    pub fn new(stream: St, func: Func) -> Self {
        Self {
            stream,
            func,
            pending: None,
            done: false,
        }
    }
}

impl<St, Func, Fut> Stream for MapLazy<St, Func, Fut>
where
    St: Stream,
    Func: FnMut(St::Item) -> Fut,
    Fut: TryFuture,
{
    type Item = Result<Fut::Ok, Fut::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.done {
                return Poll::Ready(None);
            }

            if let Some(fut) = this.pending.as_mut().as_pin_mut() {
                let output = ready!(fut.try_poll(cx));
                this.pending.set(None);
                *this.done = output.is_err();
                return Poll::Ready(Some(output));
            }

            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(item) => this.pending.set(Some((this.func)(item))),
                None => *this.done = true,
            }
        }
    }
}

impl<St, Func, Fut> FusedStream for MapLazy<St, Func, Fut>
where
    St: Stream,
    Func: FnMut(St::Item) -> Fut,
    Fut: TryFuture,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Lazily applies `func` to each element of `seq`, one at a time. Suitable for infinite sources.
///
/// See [`MapLazy`].
pub fn map_lazy<'a, T, Func, Fut>(
    func: Func,
    seq: Sequence<'a, T>,
) -> MapLazy<BoxStream<'a, T>, Func, Fut>
where
    T: Send + 'a,
    Func: FnMut(T) -> Fut,
    Fut: TryFuture,
{
    MapLazy::new(seq.into_stream(), func)
}
