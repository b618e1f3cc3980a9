//! [`SearchConfig`] for [`Search`](crate::Search).
use core::num::NonZeroUsize;

/// Default number of elements per shard.
pub const DEFAULT_SHARD_SIZE: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Tuning knobs for the array branch of [`Search`](crate::Search).
///
/// Stream-shaped inputs are always searched sequentially and ignore this config.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Arrays longer than this are split into shards of at most this many elements, each raced as a unit.
    pub shard_size: NonZeroUsize,
    /// Maximum number of shards in flight at once. `None` launches every shard immediately.
    pub max_concurrent_shards: Option<NonZeroUsize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            shard_size: DEFAULT_SHARD_SIZE,
            max_concurrent_shards: None,
        }
    }
}

impl SearchConfig {
    /// Sets [`Self::shard_size`].
    pub fn with_shard_size(self, shard_size: NonZeroUsize) -> Self {
        Self { shard_size, ..self }
    }

    /// Sets [`Self::max_concurrent_shards`].
    pub fn with_max_concurrent_shards(self, max_concurrent_shards: NonZeroUsize) -> Self {
        Self {
            max_concurrent_shards: Some(max_concurrent_shards),
            ..self
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        let config = SearchConfig::default();
        assert_eq!(1000, config.shard_size.get());
        assert_eq!(None, config.max_concurrent_shards);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_shard_size(NonZeroUsize::new(16).unwrap())
            .with_max_concurrent_shards(NonZeroUsize::new(2).unwrap());
        assert_eq!(16, config.shard_size.get());
        assert_eq!(Some(2), config.max_concurrent_shards.map(NonZeroUsize::get));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial() {
        let config: SearchConfig = serde_json::from_str(r#"{ "shard_size": 64 }"#).unwrap();
        assert_eq!(64, config.shard_size.get());
        assert_eq!(None, config.max_concurrent_shards);

        let err = serde_json::from_str::<SearchConfig>(r#"{ "shard_size": 0 }"#);
        assert!(err.is_err());
    }
}
