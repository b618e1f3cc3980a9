#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod chunk;
pub mod config;
pub mod entries;
pub mod error;
pub mod map;
pub mod quantifiers;
pub mod race;
pub mod reduce;
pub mod sequence;
pub mod some;
pub mod verdict;

pub use chunk::{Chunks, IntoChunks, chunk, chunk_vec};
pub use config::{DEFAULT_SHARD_SIZE, SearchConfig};
pub use entries::{Entries, entries};
pub use error::ChunkError;
pub use map::{MapLazy, map, map_array, map_lazy};
pub use quantifiers::{every_fail, every_fail_async, some_fail};
pub use race::Race;
pub use reduce::{ReduceTrace, reduce, reduce_trace};
pub use sequence::{IntoSequence, Sequence};
pub use some::{Search, some};
pub use tokio_util::sync::CancellationToken;
pub use verdict::Verdict;
