//! [`Entries`] and related items.
use core::pin::Pin;
use core::task::{Context, Poll, ready};

use futures_util::stream::{FusedStream, Stream, StreamExt};
use pin_project_lite::pin_project;

use crate::Sequence;

pin_project! {
    /// Same as [`Iterator::enumerate`] but as a [`Stream`].
    ///
    /// Yields `(index, item)` pairs, suspending once per source item.
    #[must_use = "streams do nothing unless polled"]
    pub struct Entries<St> {
        #[pin]
        stream: St,
        index: usize,
    }
}

impl<St> Entries<St>
where
    St: Stream,
{
    /// Create from a source `stream`, starting at index zero.
    pub fn new(stream: St) -> Self {
        Self { stream, index: 0 }
    }
}

impl<St> Stream for Entries<St>
where
    St: Stream,
{
    type Item = (usize, St::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        let item = ready!(this.stream.poll_next(cx));
        Poll::Ready(item.map(|item| {
            let index = *this.index;
            *this.index += 1;
            (index, item)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<St> FusedStream for Entries<St>
where
    St: FusedStream,
{
    fn is_terminated(&self) -> bool {
        self.stream.is_terminated()
    }
}

/// Pairs each element of `seq` with its zero-based index, preserving the variant.
pub fn entries<'a, T: 'a>(seq: Sequence<'a, T>) -> Sequence<'a, (usize, T)> {
    match seq {
        Sequence::Array(items) => Sequence::Array(items.into_iter().enumerate().collect()),
        Sequence::Iter(iter) => Sequence::Iter(Box::new(iter.enumerate())),
        Sequence::Stream(stream) => Sequence::Stream(Entries::new(stream).boxed()),
    }
}

#[cfg(test)]
mod test {
    use core::pin::pin;

    use futures_util::stream;

    use super::*;

    #[tokio::test]
    async fn test_entries_all_variants() {
        let expected = vec![(0, 'a'), (1, 'b'), (2, 'c')];

        assert_eq!(expected, entries(Sequence::from(['a', 'b', 'c'])).collect().await);
        assert_eq!(expected, entries(Sequence::iter("abc".chars())).collect().await);
        assert_eq!(
            expected,
            entries(Sequence::stream(stream::iter("abc".chars())))
                .collect()
                .await
        );
    }

    #[test]
    fn test_entries_array_keeps_len() {
        assert_eq!(Some(4), entries(Sequence::from(vec![0; 4])).len_hint());
    }

    #[test]
    fn test_entries_infinite_is_lazy() {
        let firsts: Vec<_> = match entries(Sequence::iter(10..)) {
            Sequence::Iter(iter) => iter.take(3).collect(),
            other => panic!("expected `Iter`, got {:?}", other),
        };
        assert_eq!(vec![(0, 10), (1, 11), (2, 12)], firsts);
    }

    #[test]
    fn test_entries_one_poll_per_item() {
        let mut entries = pin!(Entries::new(stream::iter(["x", "y"])));
        let cx = &mut Context::from_waker(futures_task::noop_waker_ref());

        assert_eq!(Poll::Ready(Some((0, "x"))), entries.as_mut().poll_next(cx));
        assert_eq!(Poll::Ready(Some((1, "y"))), entries.as_mut().poll_next(cx));
        assert_eq!(Poll::Ready(None), entries.as_mut().poll_next(cx));
    }
}
