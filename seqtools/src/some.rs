//! [`Search`], the short-circuiting existence search, and related items.
//!
//! Arrays are raced: every element gets its own concurrent unit, grouped into shards of
//! [`SearchConfig::shard_size`] which are themselves raced against each other. Iterators and streams have no known
//! length and may be infinite, so they are searched one element at a time instead.
//!
//! In all branches a failing predicate (or, for [`Search::run_deferred`], a failing element) counts as a non-match and
//! never fails the search as a whole.
use core::fmt::Debug;
use core::num::NonZeroUsize;

use futures_util::stream::{self, StreamExt};
use futures_util::{TryFuture, TryFutureExt};
use tokio_util::sync::CancellationToken;

use crate::race::Race;
use crate::verdict::{self, Verdict};
use crate::{SearchConfig, Sequence, chunk_vec};

/// A configured existence search. See the [module-level docs](self).
///
/// Each `Search` owns a [`CancellationToken`] which is cancelled as soon as the search is decided (or dropped).
/// Predicates which spawn work outside of the search can watch [`Search::cancellation_token`] to stop early. Work
/// driven by the search itself is cancelled by dropping it.
#[derive(Debug, Default)]
pub struct Search {
    config: SearchConfig,
    token: CancellationToken,
}

impl Search {
    /// Create with the given `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            token: CancellationToken::new(),
        }
    }

    /// Replaces the token cancelled once this search is decided.
    pub fn with_cancellation_token(self, token: CancellationToken) -> Self {
        Self { token, ..self }
    }

    /// The [`SearchConfig`] used for arrays.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Token cancelled once this search is decided. Clone it before calling [`Self::run`].
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Resolves `true` iff `predicate` matches at least one element of `seq`.
    ///
    /// An empty sequence resolves `false`. For iterators and streams, no element after the first match is pulled.
    pub async fn run<T, Func, Fut>(self, mut predicate: Func, seq: Sequence<'_, T>) -> bool
    where
        Func: FnMut(T) -> Fut,
        Fut: Future,
        Fut::Output: Verdict,
        <Fut::Output as Verdict>::Error: Debug,
    {
        let _cancel_on_decided = self.token.drop_guard();

        match seq {
            Sequence::Array(items) => race_sharded(&self.config, items, predicate).await,
            Sequence::Iter(iter) => {
                for item in iter {
                    if verdict::matched(predicate(item).await) {
                        return true;
                    }
                }
                false
            }
            Sequence::Stream(mut stream) => {
                while let Some(item) = stream.next().await {
                    if verdict::matched(predicate(item).await) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Same as [`Self::run`] for an array of deferred elements.
    ///
    /// Each unit first resolves its element; an element which fails to resolve is a non-match, just like a predicate
    /// returning `false` or failing.
    pub async fn run_deferred<Elem, Func, Fut>(self, predicate: Func, elements: Vec<Elem>) -> bool
    where
        Elem: TryFuture,
        Elem::Error: Debug,
        Func: Fn(Elem::Ok) -> Fut,
        Fut: Future,
        Fut::Output: Verdict,
        <Fut::Output as Verdict>::Error: Debug,
    {
        let _cancel_on_decided = self.token.drop_guard();

        let predicate = &predicate;
        let unit = |element: Elem| async move {
            match TryFutureExt::into_future(element).await {
                Ok(value) => verdict::matched(predicate(value).await),
                Err(error) => {
                    tracing::debug!(?error, "Element failed to resolve, treating as no match.");
                    false
                }
            }
        };
        race_sharded(&self.config, elements, unit).await
    }
}

/// Races one unit per item directly if `items` fit in one shard, otherwise races shards of them.
///
/// A shard's units are only created once the shard is started, so `max_concurrent_shards` also bounds how many times
/// `unit` has been called.
async fn race_sharded<T, Func, Fut>(config: &SearchConfig, items: Vec<T>, mut unit: Func) -> bool
where
    Func: FnMut(T) -> Fut,
    Fut: Future,
    Fut::Output: Verdict,
    <Fut::Output as Verdict>::Error: Debug,
{
    let shard_size = config.shard_size.get();
    if items.len() <= shard_size {
        tracing::trace!(units = items.len(), "Racing a single shard.");
        return Race::new(items.into_iter().map(unit)).await;
    }

    let Ok(shards) = chunk_vec(items, shard_size) else {
        unreachable!("more items than `shard_size`, which is non-zero");
    };
    let shard_count = shards.len();
    let limit = config
        .max_concurrent_shards
        .map_or(shard_count, NonZeroUsize::get);
    tracing::trace!(shard_count, limit, "Racing shards.");

    let mut races = stream::iter(shards)
        .map(|shard| Race::new(shard.into_iter().map(&mut unit)))
        .buffer_unordered(limit);
    while let Some(found) = races.next().await {
        if found {
            return true;
        }
    }
    false
}

/// Resolves `true` iff `predicate` matches at least one element of `seq`, using [`SearchConfig::default`].
///
/// See [`Search::run`].
pub async fn some<T, Func, Fut>(predicate: Func, seq: Sequence<'_, T>) -> bool
where
    Func: FnMut(T) -> Fut,
    Fut: Future,
    Fut::Output: Verdict,
    <Fut::Output as Verdict>::Error: Debug,
{
    Search::default().run(predicate, seq).await
}
