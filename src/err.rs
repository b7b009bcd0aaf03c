use thiserror::Error;

/// Raised when a patch does not fit the sequence it is checked or applied
/// against, or when a patch is assembled from inconsistent deltas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A chunk's recorded region does not exist in the target sequence. The
    /// patch is stale or belongs to a different sequence.
    #[error(
        "chunk does not fit target: position {position} with length {length} exceeds target length {target_len}"
    )]
    PositionOutOfRange {
        position: usize,
        length: usize,
        target_len: usize,
    },

    /// The target's content at the chunk's position differs from the content
    /// captured when the chunk was built.
    #[error("chunk content mismatch at position {position}, offset {offset}")]
    ContentMismatch { position: usize, offset: usize },

    /// Two deltas of one patch claim the same original position, so their
    /// relative order would be undefined.
    #[error("conflicting delta: original position {position} is already occupied")]
    ConflictingDelta { position: usize },
}

/// Raised when a patch cannot be encoded to bytes or parsed back.
#[derive(Debug, Error)]
pub enum SerdeError {
    #[error("patch encode failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("patch decode failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The bytes decoded, but the deltas inside are not strictly ascending
    /// by original position.
    #[error("patch decode failed: delta at original position {position} is out of order")]
    UnorderedDeltas { position: usize },
}
