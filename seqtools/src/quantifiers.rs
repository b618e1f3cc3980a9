//! Sequential quantifiers derived from the existence search.
//!
//! These differ from [`some`](crate::some()) in how a failing predicate is handled: [`every_fail`] and
//! [`every_fail_async`] return the predicate's error immediately, while [`some_fail`] treats it as a non-match and
//! moves on to the next element.
use core::fmt::Debug;

use futures_util::StreamExt;

use crate::Sequence;
use crate::verdict::Verdict;

/// `Ok(true)` iff `predicate` matches no item, which is vacuously true for an empty input.
///
/// Stops at the first match, returning `Ok(false)`. A predicate error is returned immediately.
pub fn every_fail<I, Func, V>(mut predicate: Func, items: I) -> Result<bool, V::Error>
where
    I: IntoIterator,
    Func: FnMut(I::Item) -> V,
    V: Verdict,
{
    for item in items {
        if predicate(item).into_result()? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Same as [`every_fail`] but with an async `predicate`, over any [`Sequence`]. Always sequential.
pub async fn every_fail_async<T, Func, Fut>(
    mut predicate: Func,
    seq: Sequence<'_, T>,
) -> Result<bool, <Fut::Output as Verdict>::Error>
where
    Func: FnMut(T) -> Fut,
    Fut: Future,
    Fut::Output: Verdict,
{
    match seq {
        Sequence::Array(items) => {
            for item in items {
                if predicate(item).await.into_result()? {
                    return Ok(false);
                }
            }
        }
        Sequence::Iter(iter) => {
            for item in iter {
                if predicate(item).await.into_result()? {
                    return Ok(false);
                }
            }
        }
        Sequence::Stream(mut stream) => {
            while let Some(item) = stream.next().await {
                if predicate(item).await.into_result()? {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

/// `true` iff an element does not satisfy the predicate, stopping at the first such element.
pub async fn some_fail<T, Func, Fut>(mut predicate: Func, seq: Sequence<'_, T>) -> bool
where
    Func: FnMut(T) -> Fut,
    Fut: Future,
    Fut::Output: Verdict,
    <Fut::Output as Verdict>::Error: Debug,
{
    /// `true` if `verdict` is a definite non-match. Errors are skipped.
    fn failed<V>(verdict: V) -> bool
    where
        V: Verdict,
        V::Error: Debug,
    {
        match verdict.into_result() {
            Ok(matched) => !matched,
            Err(error) => {
                tracing::debug!(?error, "Predicate failed, skipping element.");
                false
            }
        }
    }

    match seq {
        Sequence::Array(items) => {
            for item in items {
                if failed(predicate(item).await) {
                    return true;
                }
            }
        }
        Sequence::Iter(iter) => {
            for item in iter {
                if failed(predicate(item).await) {
                    return true;
                }
            }
        }
        Sequence::Stream(mut stream) => {
            while let Some(item) = stream.next().await {
                if failed(predicate(item).await) {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures_util::stream;

    use super::*;

    #[test]
    fn test_every_fail() {
        assert_eq!(Ok(true), every_fail(|x: &u32| *x > 10, &[1, 2, 3]));
        assert_eq!(Ok(false), every_fail(|x: &u32| *x > 2, &[1, 2, 3]));
        assert_eq!(Ok(true), every_fail(|_: u32| true, []));
    }

    #[test]
    fn test_every_fail_propagates_error() {
        let result = every_fail(
            |x: u32| if x == 999 { Err("boom") } else { Ok(false) },
            0..=999,
        );
        assert_eq!(Err("boom"), result);
    }

    #[test]
    fn test_every_fail_stops_at_match() {
        let seen = AtomicUsize::new(0);
        let result = every_fail(
            |x: u32| {
                seen.fetch_add(1, Ordering::SeqCst);
                if x > 5 { Err("unreachable") } else { Ok(x == 2) }
            },
            0..,
        );
        assert_eq!(Ok(false), result);
        assert_eq!(3, seen.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_every_fail_async() {
        let predicate = |x: u32| async move { x == 3 };
        assert_eq!(Ok(false), every_fail_async(predicate, Sequence::from([1, 3])).await);
        assert_eq!(Ok(true), every_fail_async(predicate, Sequence::iter(0..3)).await);
        assert_eq!(
            Ok(false),
            every_fail_async(predicate, Sequence::stream(stream::iter(0..))).await
        );
        assert_eq!(Ok(true), every_fail_async(predicate, Sequence::from(vec![])).await);
    }

    #[tokio::test]
    async fn test_every_fail_async_propagates_error() {
        let result = every_fail_async(
            |x: u32| async move { if x == 1 { Err("boom") } else { Ok(x == 5) } },
            Sequence::stream(stream::iter(0..10)),
        )
        .await;
        assert_eq!(Err("boom"), result);
    }

    #[tokio::test]
    async fn test_some_fail() {
        let predicate = |x: u32| async move { x < 3 };
        assert!(some_fail(predicate, Sequence::from([1, 2, 3])).await);
        assert!(!some_fail(predicate, Sequence::iter([0, 1, 2])).await);
        assert!(!some_fail(predicate, Sequence::from(vec![])).await);
        assert!(some_fail(predicate, Sequence::stream(stream::iter(0..))).await);
    }

    #[tokio::test]
    async fn test_some_fail_skips_errors() {
        let predicate = |x: u32| async move {
            match x {
                1 => Err("boom"),
                4 => Ok(false),
                _ => Ok(true),
            }
        };
        assert!(!some_fail(predicate, Sequence::from([0, 1, 2])).await);
        assert!(some_fail(predicate, Sequence::iter(0..)).await);
    }
}
