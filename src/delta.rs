use bincode::{Decode, Encode};

use crate::chunk::Chunk;
use crate::err::PatchError;

/// One edit region of a patch. Every variant carries both sides of the
/// region: `original` addresses the source sequence, `revised` the revised
/// one. Positions are absolute within their own sequence, so a delta can be
/// checked and applied without replaying the deltas before it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Delta<T> {
    /// Elements present only in the revised sequence. `original` is an empty
    /// chunk marking the insertion point.
    Insert {
        original: Chunk<T>,
        revised: Chunk<T>,
    },
    /// Elements present only in the original sequence. `revised` is an empty
    /// chunk marking where the gap falls in the revised sequence.
    Delete {
        original: Chunk<T>,
        revised: Chunk<T>,
    },
    /// A region whose content differs between the two sequences. The two
    /// chunks may have different lengths.
    Change {
        original: Chunk<T>,
        revised: Chunk<T>,
    },
}

impl<T> Delta<T> {
    /// The chunk addressing the original sequence.
    pub fn original(&self) -> &Chunk<T> {
        match self {
            Delta::Insert { original, .. }
            | Delta::Delete { original, .. }
            | Delta::Change { original, .. } => original,
        }
    }

    /// The chunk addressing the revised sequence.
    pub fn revised(&self) -> &Chunk<T> {
        match self {
            Delta::Insert { revised, .. }
            | Delta::Delete { revised, .. }
            | Delta::Change { revised, .. } => revised,
        }
    }
}

impl<T: PartialEq> Delta<T> {
    /// Checks that the delta still fits `target`, the original-side
    /// sequence. An insert only needs its position to exist; a delete or
    /// change also requires its recorded content to be present.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        match self {
            Delta::Insert { original, .. } => {
                if original.position() > target.len() {
                    return Err(PatchError::PositionOutOfRange {
                        position: original.position(),
                        length: 0,
                        target_len: target.len(),
                    });
                }
                Ok(())
            }
            Delta::Delete { original, .. } | Delta::Change { original, .. } => {
                original.verify(target)
            }
        }
    }
}

impl<T: PartialEq + Clone> Delta<T> {
    /// Verifies the delta against `target`, then edits `target` in place to
    /// carry the revised content. `target` is untouched on error.
    pub fn apply_to(&self, target: &mut Vec<T>) -> Result<(), PatchError> {
        self.verify(target)?;
        match self {
            Delta::Insert { original, revised } => {
                let at = original.position();
                target.splice(at..at, revised.content().iter().cloned());
            }
            Delta::Delete { original, .. } => {
                let at = original.position();
                target.drain(at..at + original.len());
            }
            Delta::Change { original, revised } => {
                let at = original.position();
                target.splice(at..at + original.len(), revised.content().iter().cloned());
            }
        }
        Ok(())
    }
}

impl<T: Clone> Delta<T> {
    /// Undoes the delta on a revised-side sequence, bringing the original
    /// content back. Only positions are checked; content is trusted.
    pub fn restore(&self, target: &mut Vec<T>) -> Result<(), PatchError> {
        match self {
            Delta::Insert { revised, .. } => {
                let at = revised.position();
                if revised.end().map_or(true, |end| end > target.len()) {
                    return Err(PatchError::PositionOutOfRange {
                        position: at,
                        length: revised.len(),
                        target_len: target.len(),
                    });
                }
                target.drain(at..at + revised.len());
            }
            Delta::Delete { original, revised } => {
                let at = revised.position();
                if at > target.len() {
                    return Err(PatchError::PositionOutOfRange {
                        position: at,
                        length: 0,
                        target_len: target.len(),
                    });
                }
                target.splice(at..at, original.content().iter().cloned());
            }
            Delta::Change { original, revised } => {
                let at = revised.position();
                if revised.end().map_or(true, |end| end > target.len()) {
                    return Err(PatchError::PositionOutOfRange {
                        position: at,
                        length: revised.len(),
                        target_len: target.len(),
                    });
                }
                target.splice(at..at + revised.len(), original.content().iter().cloned());
            }
        }
        Ok(())
    }
}
