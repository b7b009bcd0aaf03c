use bincode::{Decode, Encode, decode_from_slice, encode_to_vec};

use crate::delta::Delta;
use crate::err::{PatchError, SerdeError};
use crate::util::create_bincode_config;

/// An ordered set of deltas describing how one sequence becomes another.
///
/// Deltas are kept sorted by ascending original position and never overlap
/// when produced by the diff engine. Application walks them back to front so
/// that splicing one region never shifts the recorded positions of the
/// regions before it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Patch<T> {
    deltas: Vec<Delta<T>>,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self { deltas: Vec::new() }
    }
}

impl<T> Patch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Deltas in ascending original-position order.
    pub fn deltas(&self) -> &[Delta<T>] {
        &self.deltas
    }

    /// Inserts a delta at its sorted slot. Two deltas may not claim the same
    /// original position, since the order of their edits would be undefined.
    pub fn add_delta(&mut self, delta: Delta<T>) -> Result<(), PatchError> {
        let position = delta.original().position();
        match self
            .deltas
            .binary_search_by(|d| d.original().position().cmp(&position))
        {
            Ok(_) => Err(PatchError::ConflictingDelta { position }),
            Err(slot) => {
                self.deltas.insert(slot, delta);
                Ok(())
            }
        }
    }

    /// Appends a delta emitted by the diff engine. The engine walks both
    /// sequences front to back, so positions arrive strictly ascending.
    pub(crate) fn push(&mut self, delta: Delta<T>) {
        debug_assert!(
            self.deltas
                .last()
                .map_or(true, |last| last.original().position()
                    < delta.original().position()),
            "deltas must arrive in ascending original order"
        );
        self.deltas.push(delta);
    }
}

impl<T: PartialEq + Clone> Patch<T> {
    /// Applies every delta to a copy of `original`, producing the revised
    /// sequence. The first delta that no longer fits aborts the whole
    /// application, so no partially patched sequence ever escapes.
    pub fn apply(&self, original: &[T]) -> Result<Vec<T>, PatchError> {
        log::trace!(
            "applying {} deltas to sequence of len {}",
            self.deltas.len(),
            original.len()
        );
        let mut result = original.to_vec();
        for delta in self.deltas.iter().rev() {
            delta.apply_to(&mut result)?;
        }
        Ok(result)
    }
}

impl<T: Clone> Patch<T> {
    /// Undoes every delta on a copy of `revised`, recovering the original
    /// sequence.
    pub fn restore(&self, revised: &[T]) -> Result<Vec<T>, PatchError> {
        log::trace!(
            "restoring {} deltas from sequence of len {}",
            self.deltas.len(),
            revised.len()
        );
        let mut result = revised.to_vec();
        for delta in self.deltas.iter().rev() {
            delta.restore(&mut result)?;
        }
        Ok(result)
    }
}

impl<T: Encode> Patch<T> {
    /// Encodes the patch with the crate's wire configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerdeError> {
        Ok(encode_to_vec(self, create_bincode_config())?)
    }
}

impl<T: Decode<()>> Patch<T> {
    /// Decodes a patch produced by [`Patch::to_bytes`]. Byte streams whose
    /// deltas are not strictly ascending by original position are rejected;
    /// chunk contents are taken as produced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        let (patch, _): (Self, usize) = decode_from_slice(bytes, create_bincode_config())?;
        for pair in patch.deltas.windows(2) {
            if pair[1].original().position() <= pair[0].original().position() {
                return Err(SerdeError::UnorderedDeltas {
                    position: pair[1].original().position(),
                });
            }
        }
        Ok(patch)
    }
}
