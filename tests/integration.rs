use proptest::prelude::*;

use seq_diff::{Chunk, Delta, Patch, PatchError, diff, diff_lines, patch, unpatch};

// length of the longest common subsequence, the yardstick for a minimal
// edit script: any shortest script deletes n - lcs and inserts m - lcs
fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            table[i + 1][j + 1] = if x == y {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }
    table[a.len()][b.len()]
}

proptest! {
    #[test]
    fn test_apply_round_trip(
        old in prop::collection::vec(0u8..6, 0..40),
        new in prop::collection::vec(0u8..6, 0..40),
    ) {
        let changes = diff(&old, &new);
        prop_assert_eq!(patch(&old, &changes).unwrap(), new);
    }

    #[test]
    fn test_restore_round_trip(
        old in prop::collection::vec(0u8..6, 0..40),
        new in prop::collection::vec(0u8..6, 0..40),
    ) {
        let changes = diff(&old, &new);
        prop_assert_eq!(unpatch(&new, &changes).unwrap(), old);
    }

    #[test]
    fn test_edit_counts_are_minimal(
        old in prop::collection::vec(0u8..6, 0..40),
        new in prop::collection::vec(0u8..6, 0..40),
    ) {
        let changes = diff(&old, &new);
        let mut deleted = 0;
        let mut inserted = 0;
        for delta in changes.deltas() {
            deleted += delta.original().len();
            inserted += delta.revised().len();
        }
        let lcs = lcs_len(&old, &new);
        prop_assert_eq!(deleted, old.len() - lcs);
        prop_assert_eq!(inserted, new.len() - lcs);
    }

    #[test]
    fn test_delta_positions_are_coherent(
        old in prop::collection::vec(0u8..6, 0..40),
        new in prop::collection::vec(0u8..6, 0..40),
    ) {
        let changes = diff(&old, &new);
        let mut prev_end: Option<usize> = None;
        let mut offset: isize = 0;
        for delta in changes.deltas() {
            let original = delta.original();
            let revised = delta.revised();
            // regions never touch: at least one matching element separates
            // consecutive deltas
            if let Some(end) = prev_end {
                prop_assert!(original.position() > end);
            }
            // the revised position is the original one shifted by the net
            // growth of all preceding deltas
            prop_assert_eq!(
                revised.position() as isize,
                original.position() as isize + offset
            );
            prev_end = Some(original.position() + original.len());
            offset += revised.len() as isize - original.len() as isize;
        }
    }

    #[test]
    fn test_reassembled_patch_applies(
        old in prop::collection::vec(0u8..6, 0..40),
        new in prop::collection::vec(0u8..6, 0..40),
    ) {
        let changes = diff(&old, &new);
        // feeding the deltas back in reverse order must land them in the
        // same sorted slots
        let mut rebuilt = Patch::new();
        for delta in changes.deltas().iter().rev() {
            rebuilt.add_delta(delta.clone()).unwrap();
        }
        prop_assert_eq!(rebuilt, changes);
    }

    #[test]
    fn test_identical_sequences_need_no_deltas(
        seq in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        prop_assert!(diff(&seq, &seq).is_empty());
    }

    #[test]
    fn test_diff_lines_round_trip(
        old in prop::collection::vec("[a-c]{0,3}", 0..8),
        new in prop::collection::vec("[a-c]{0,3}", 0..8),
    ) {
        let old_text = old.join("\n");
        let new_text = new.join("\n");
        let changes = diff_lines(&old_text, &new_text);
        let old_lines: Vec<&str> = old_text.lines().collect();
        let new_lines: Vec<&str> = new_text.lines().collect();
        prop_assert_eq!(changes.apply(&old_lines).unwrap(), new_lines.clone());
        prop_assert_eq!(changes.restore(&new_lines).unwrap(), old_lines);
    }

    #[test]
    fn test_serialized_patch_survives_round_trip(
        old in prop::collection::vec(0u8..6, 0..40),
        new in prop::collection::vec(0u8..6, 0..40),
    ) {
        let changes = diff(&old, &new);
        let bytes = changes.to_bytes().unwrap();
        let decoded: Patch<u8> = Patch::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&decoded, &changes);
        prop_assert_eq!(decoded.apply(&old).unwrap(), new);
    }
}

#[test]
fn test_stale_target_is_rejected() {
    let changes = diff(&[1u8, 2, 3], &[1u8, 9, 3]);
    assert_eq!(
        patch(&[7u8, 7, 7], &changes),
        Err(PatchError::ContentMismatch {
            position: 1,
            offset: 0,
        })
    );
    assert_eq!(
        patch(&[1u8], &changes),
        Err(PatchError::PositionOutOfRange {
            position: 1,
            length: 1,
            target_len: 1,
        })
    );
}

#[test]
fn test_conflicting_delta_is_rejected() {
    let mut changes: Patch<u8> = Patch::new();
    changes
        .add_delta(Delta::Delete {
            original: Chunk::new(2, vec![5]),
            revised: Chunk::new(2, vec![]),
        })
        .unwrap();
    let denied = changes.add_delta(Delta::Insert {
        original: Chunk::new(2, vec![]),
        revised: Chunk::new(2, vec![8]),
    });
    assert_eq!(denied, Err(PatchError::ConflictingDelta { position: 2 }));
}

#[test]
fn test_restore_of_foreign_sequence_fails_on_bounds() {
    let changes = diff(&[1u8, 2, 3, 4], &[1u8, 4]);
    assert!(matches!(
        unpatch(&[] as &[u8], &changes),
        Err(PatchError::PositionOutOfRange { .. })
    ));
}

#[test]
fn test_patch_with_huge_positions_is_rejected() {
    let mut changes: Patch<u8> = Patch::new();
    changes
        .add_delta(Delta::Delete {
            original: Chunk::new(usize::MAX, vec![5]),
            revised: Chunk::new(usize::MAX, vec![]),
        })
        .unwrap();
    assert!(matches!(
        patch(&[1u8, 2, 3], &changes),
        Err(PatchError::PositionOutOfRange { .. })
    ));
    assert!(matches!(
        unpatch(&[1u8, 2, 3], &changes),
        Err(PatchError::PositionOutOfRange { .. })
    ));
}
