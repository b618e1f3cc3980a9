//! [`Chunks`], [`IntoChunks`], and related items.
use core::iter::FusedIterator;

use crate::ChunkError;

/// Checks `chunk` preconditions, before anything is yielded.
fn validate(len: usize, size: usize) -> Result<(), ChunkError> {
    if len == 0 {
        return Err(ChunkError::EmptyInput);
    }
    if size == 0 {
        return Err(ChunkError::InvalidChunkSize);
    }
    if size > len {
        return Err(ChunkError::OutOfRange { size, len });
    }
    Ok(())
}

/// Iterator over consecutive, non-overlapping sub-slices of a slice. Created by [`chunk`].
///
/// Every group has exactly `size` elements except possibly the last.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunks<'a, T> {
    inner: core::slice::Chunks<'a, T>,
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T> ExactSizeIterator for Chunks<'_, T> {}
impl<T> FusedIterator for Chunks<'_, T> {}

/// Iterator over owned, consecutive groups of a `Vec`. Created by [`chunk_vec`].
///
/// Every group has exactly `size` elements except possibly the last.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoChunks<T> {
    items: std::vec::IntoIter<T>,
    size: usize,
}

impl<T> Iterator for IntoChunks<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.items.as_slice().is_empty() {
            return None;
        }
        Some(self.items.by_ref().take(self.size).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let groups = self.items.len().div_ceil(self.size);
        (groups, Some(groups))
    }
}
impl<T> ExactSizeIterator for IntoChunks<T> {}
impl<T> FusedIterator for IntoChunks<T> {}

/// Splits a non-empty slice into groups of `size` elements, by slicing.
///
/// Fails immediately if `items` is empty, if `size` is zero, or if `size` is larger than `items`.
pub fn chunk<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>, ChunkError> {
    validate(items.len(), size)?;
    Ok(Chunks {
        inner: items.chunks(size),
    })
}

/// Same as [`chunk`] but takes ownership and yields owned groups.
pub fn chunk_vec<T>(items: Vec<T>, size: usize) -> Result<IntoChunks<T>, ChunkError> {
    validate(items.len(), size)?;
    Ok(IntoChunks {
        items: items.into_iter(),
        size,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_chunk_uneven() {
        let groups: Vec<_> = chunk(&[1, 2, 3, 4, 5], 2).unwrap().collect();
        assert_eq!(vec![&[1, 2][..], &[3, 4], &[5]], groups);
    }

    #[test]
    fn test_chunk_even() {
        let groups: Vec<_> = chunk(&[1, 2, 3, 4], 2).unwrap().collect();
        assert_eq!(vec![&[1, 2][..], &[3, 4]], groups);
    }

    #[test]
    fn test_chunk_whole() {
        let mut groups = chunk(&['a', 'b', 'c'], 3).unwrap();
        assert_eq!(1, groups.len());
        assert_eq!(Some(&['a', 'b', 'c'][..]), groups.next());
        assert_eq!(None, groups.next());
    }

    #[test]
    fn test_chunk_slices_borrow() {
        let items = [10, 20, 30];
        let first = chunk(&items, 2).unwrap().next().unwrap();
        assert!(core::ptr::eq(&items[0], &first[0]));
    }

    #[test]
    fn test_chunk_errors() {
        assert_eq!(ChunkError::EmptyInput, chunk::<i32>(&[], 2).unwrap_err());
        assert_eq!(
            ChunkError::OutOfRange { size: 5, len: 2 },
            chunk(&[1, 2], 5).unwrap_err()
        );
        assert_eq!(ChunkError::InvalidChunkSize, chunk(&[1, 2, 3], 0).unwrap_err());
        // Empty input is reported first.
        assert_eq!(ChunkError::EmptyInput, chunk::<i32>(&[], 0).unwrap_err());
    }

    #[test]
    fn test_chunk_vec() {
        let groups = chunk_vec((0..7).collect(), 3).unwrap();
        assert_eq!(3, groups.len());
        assert_eq!(
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]],
            groups.collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_chunk_vec_errors() {
        assert_eq!(
            ChunkError::EmptyInput,
            chunk_vec(Vec::<()>::new(), 1).unwrap_err()
        );
        assert_eq!(
            ChunkError::InvalidChunkSize,
            chunk_vec(vec![()], 0).unwrap_err()
        );
    }

    #[test]
    fn test_chunk_partitions_exactly() {
        let items: Vec<usize> = (0..1001).collect();
        for size in [1, 7, 10, 333, 1000, 1001] {
            let groups: Vec<_> = chunk(&items, size).unwrap().collect();
            assert!(groups[..groups.len() - 1].iter().all(|g| g.len() == size));
            assert!(!groups.last().unwrap().is_empty());
            assert_eq!(items, groups.concat(), "size {}", size);
        }
    }
}
