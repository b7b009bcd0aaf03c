//! Shortest edit script diff, after Myers, "An O(ND) Difference Algorithm
//! and Its Variations" (1986). The forward search tracks the furthest
//! reaching path on each diagonal and keeps one snapshot per round, so the
//! edit path can be recovered by walking the snapshots backwards.

use crate::DiffAlgorithm;
use crate::chunk::Chunk;
use crate::delta::Delta;
use crate::patch::Patch;

/// Myers' greedy shortest edit script algorithm. Produces a patch with the
/// minimum number of inserted and deleted elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl<T: PartialEq + Clone> DiffAlgorithm<T> for MyersDiff {
    fn diff(&self, original: &[T], revised: &[T]) -> Patch<T> {
        diff(original, revised)
    }
}

/// Computes the patch turning `original` into `revised` under `==`.
pub fn diff<T: PartialEq + Clone>(original: &[T], revised: &[T]) -> Patch<T> {
    diff_by(original, revised, |a, b| a == b)
}

/// Computes the patch turning `original` into `revised`, with `eq` deciding
/// element equality.
///
/// When `eq` is coarser than `==`, regions it deems equal keep their
/// original elements: applying the patch then yields a sequence equal to
/// `revised` under `eq`, not necessarily element for element.
pub fn diff_by<T, F>(original: &[T], revised: &[T], mut eq: F) -> Patch<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if original.is_empty() && revised.is_empty() {
        return Patch::new();
    }
    let script = shortest_edit_script(original, revised, &mut eq);
    let patch = build_patch(&script, original, revised);
    log::debug!(
        "diffed {} -> {} elements into {} deltas",
        original.len(),
        revised.len(),
        patch.len()
    );
    patch
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditOp {
    Equal,
    Delete,
    Insert,
}

/// Furthest reaching x per diagonal k = x - y. Diagonals run from -(n + m)
/// to n + m, stored flat with an offset so negative k can index the vec.
#[derive(Clone)]
struct Reach {
    offset: isize,
    slots: Vec<usize>,
}

impl Reach {
    fn new(max: usize) -> Self {
        Reach {
            offset: max as isize,
            slots: vec![0; 2 * max + 1],
        }
    }

    fn get(&self, k: isize) -> usize {
        self.slots[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, x: usize) {
        let slot = (k + self.offset) as usize;
        self.slots[slot] = x;
    }
}

/// Forward search for the shortest edit path from (0, 0) to (n, m). Each
/// round d extends every diagonal reachable with d edits; the first round
/// that reaches (n, m) wins. A round only writes diagonals of its own
/// parity, so a snapshot taken after round d still carries the round d - 1
/// values on the neighbouring diagonals, which is exactly what the
/// backtrack needs.
fn shortest_edit_script<T, F>(a: &[T], b: &[T], eq: &mut F) -> Vec<EditOp>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = a.len();
    let m = b.len();
    let max = n + m;
    let mut reach = Reach::new(max);
    reach.set(1, 0);
    let mut trace: Vec<Reach> = Vec::new();

    for d in 0..=(max as isize) {
        for k in (-d..=d).step_by(2) {
            // ties take the k - 1 edge, so deletes come before inserts
            let mut x = if k == -d || (k != d && reach.get(k - 1) < reach.get(k + 1)) {
                reach.get(k + 1)
            } else {
                reach.get(k - 1) + 1
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && eq(&a[x], &b[y]) {
                x += 1;
                y += 1;
            }
            reach.set(k, x);
            if x >= n && y >= m {
                trace.push(reach.clone());
                return backtrack(&trace, n, m);
            }
        }
        trace.push(reach.clone());
    }
    unreachable!("an edit path always exists within n + m edits");
}

/// Walks the snapshots from (n, m) back to (0, 0), reproducing the forward
/// search's choice at every round, and returns the edit script front to
/// back.
fn backtrack(trace: &[Reach], n: usize, m: usize) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let mut x = n as isize;
    let mut y = m as isize;
    for (d, reach) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;
        let prev_k = if k == -d || (k != d && reach.get(k - 1) < reach.get(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = reach.get(prev_k) as isize;
        let prev_y = prev_x - prev_k;
        while x > prev_x && y > prev_y {
            ops.push(EditOp::Equal);
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if x == prev_x {
                ops.push(EditOp::Insert);
            } else {
                ops.push(EditOp::Delete);
            }
        }
        x = prev_x;
        y = prev_y;
    }
    ops.reverse();
    ops
}

/// Folds the edit script into deltas. Every maximal run of non-equal ops
/// becomes one delta; a run of only deletes or only inserts keeps its
/// dedicated variant, a mixed run becomes a change.
fn build_patch<T: Clone>(script: &[EditOp], a: &[T], b: &[T]) -> Patch<T> {
    let mut patch = Patch::new();
    let mut old_ptr = 0;
    let mut new_ptr = 0;
    let mut i = 0;
    while i < script.len() {
        if script[i] == EditOp::Equal {
            old_ptr += 1;
            new_ptr += 1;
            i += 1;
            continue;
        }
        let run_old_start = old_ptr;
        let run_new_start = new_ptr;
        let mut deleted = 0;
        let mut inserted = 0;
        while i < script.len() {
            match script[i] {
                EditOp::Delete => {
                    deleted += 1;
                    old_ptr += 1;
                }
                EditOp::Insert => {
                    inserted += 1;
                    new_ptr += 1;
                }
                EditOp::Equal => break,
            }
            i += 1;
        }
        let original = Chunk::new(run_old_start, a[run_old_start..old_ptr].to_vec());
        let revised = Chunk::new(run_new_start, b[run_new_start..new_ptr].to_vec());
        patch.push(if deleted == 0 {
            Delta::Insert { original, revised }
        } else if inserted == 0 {
            Delta::Delete { original, revised }
        } else {
            Delta::Change { original, revised }
        });
    }
    patch
}
