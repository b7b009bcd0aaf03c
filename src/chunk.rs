use bincode::{Decode, Encode};

use crate::err::PatchError;

/// A captured slice of one sequence: where it starts and what it held when
/// the chunk was built. Content is owned, never a view into caller storage,
/// so resizing the source later cannot invalidate a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Chunk<T> {
    position: usize,
    content: Vec<T>,
}

impl<T> Chunk<T> {
    pub fn new(position: usize, content: Vec<T>) -> Self {
        Self { position, content }
    }

    /// Start position of the chunk in its sequence (zero-based).
    pub fn position(&self) -> usize {
        self.position
    }

    /// The captured elements.
    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Index of the last element covered by the chunk. `None` when the chunk
    /// is empty or the index does not fit a `usize`.
    pub fn last_index(&self) -> Option<usize> {
        if self.content.is_empty() {
            None
        } else {
            self.position.checked_add(self.content.len() - 1)
        }
    }

    /// One past the chunk's last covered index, `None` when that exceeds
    /// `usize::MAX`. Positions are caller data, so the sum may not fit.
    pub(crate) fn end(&self) -> Option<usize> {
        self.position.checked_add(self.content.len())
    }
}

impl<T: PartialEq> Chunk<T> {
    /// Checks that `target` still carries this chunk's content at its
    /// recorded position.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        if self.end().map_or(true, |end| end > target.len()) {
            return Err(PatchError::PositionOutOfRange {
                position: self.position,
                length: self.content.len(),
                target_len: target.len(),
            });
        }
        for (offset, element) in self.content.iter().enumerate() {
            if target[self.position + offset] != *element {
                return Err(PatchError::ContentMismatch {
                    position: self.position,
                    offset,
                });
            }
        }
        Ok(())
    }
}
