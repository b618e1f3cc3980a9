//! [`Sequence`] and related items.
use core::fmt;

use futures_util::stream::{self, BoxStream, Stream, StreamExt};

/// The input shape shared by every combinator in this crate.
///
/// Each combinator dispatches on the variant: arrays may be evaluated concurrently, while iterators and streams are
/// pulled one element at a time since they may be infinite. All variants are single-pass.
pub enum Sequence<'a, T> {
    /// A finite, in-memory array with a known length.
    Array(Vec<T>),
    /// A lazy synchronous source, possibly infinite.
    Iter(Box<dyn Iterator<Item = T> + Send + 'a>),
    /// A lazy asynchronous source, possibly infinite. Each pull may suspend.
    Stream(BoxStream<'a, T>),
}

impl<'a, T> Sequence<'a, T> {
    /// Creates a [`Sequence::Iter`] from anything iterable.
    pub fn iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'a,
    {
        Self::Iter(Box::new(iter.into_iter()))
    }

    /// Creates a [`Sequence::Stream`] from a [`Stream`].
    pub fn stream<St>(stream: St) -> Self
    where
        St: Stream<Item = T> + Send + 'a,
    {
        Self::Stream(stream.boxed())
    }

    /// The length, if it is known up front (only for [`Sequence::Array`]).
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            Self::Array(items) => Some(items.len()),
            Self::Iter(_) | Self::Stream(_) => None,
        }
    }

    /// Materializes all elements into a `Vec`, in order.
    ///
    /// Never returns for an infinite source.
    pub async fn collect(self) -> Vec<T> {
        match self {
            Self::Array(items) => items,
            Self::Iter(iter) => iter.collect(),
            Self::Stream(stream) => stream.collect().await,
        }
    }

    /// Views any variant as a [`BoxStream`], without materializing it.
    pub fn into_stream(self) -> BoxStream<'a, T>
    where
        T: Send + 'a,
    {
        match self {
            Self::Array(items) => stream::iter(items).boxed(),
            Self::Iter(iter) => stream::iter(iter).boxed(),
            Self::Stream(stream) => stream,
        }
    }
}

impl<T> From<Vec<T>> for Sequence<'_, T> {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<'_, T> {
    fn from(items: [T; N]) -> Self {
        Self::Array(Vec::from(items))
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(items) => f.debug_struct("Array").field("len", &items.len()).finish(),
            Self::Iter(_) => f.debug_struct("Iter").finish_non_exhaustive(),
            Self::Stream(_) => f.debug_struct("Stream").finish_non_exhaustive(),
        }
    }
}

/// Blanket trait for turning collections, iterators, and streams into a [`Sequence`].
pub trait IntoSequence {
    /// Collects `self` into a [`Sequence::Array`].
    fn into_array_sequence<'a>(self) -> Sequence<'a, <Self as IntoIterator>::Item>
    where
        Self: Sized + IntoIterator,
    {
        Sequence::Array(self.into_iter().collect())
    }

    /// Wraps `self` lazily as a [`Sequence::Iter`].
    fn into_iter_sequence<'a>(self) -> Sequence<'a, <Self as IntoIterator>::Item>
    where
        Self: Sized + IntoIterator,
        <Self as IntoIterator>::IntoIter: Send + 'a,
    {
        Sequence::iter(self)
    }

    /// Wraps `self` lazily as a [`Sequence::Stream`].
    fn into_stream_sequence<'a>(self) -> Sequence<'a, <Self as Stream>::Item>
    where
        Self: Sized + Stream + Send + 'a,
    {
        Sequence::stream(self)
    }
}
impl<T> IntoSequence for T {}
