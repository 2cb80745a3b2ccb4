use fnv::FnvHashMap;

use crate::board::Board;
use crate::solver::search::SearchNode;

/// Hash-bucketed set of canonical boards already enqueued by the solver.
///
/// The bucket index (fingerprint) of a board is the sum, modulo `W*H`, of
/// `row*W + col` over every cell holding a box. The player's position is
/// irrelevant to state identity once a board is canonicalized, so only
/// the box cells feed the fingerprint. Collisions within a bucket are
/// resolved by exact `Board` equality; this is a deliberately weak hash
/// (see DESIGN.md) kept because a stronger one changes nothing externally
/// observable.
pub struct VisitedSet<'arena> {
    width: i32,
    height: i32,
    buckets: FnvHashMap<i32, Vec<&'arena SearchNode<'arena>>>,
}

impl<'arena> VisitedSet<'arena> {
    pub fn new(width: i32, height: i32) -> Self {
        VisitedSet {
            width,
            height,
            buckets: FnvHashMap::default(),
        }
    }

    pub fn fingerprint(&self, board: &Board) -> i32 {
        let modulus = self.width * self.height;
        let sum: i64 = board
            .box_positions()
            .map(|p| i64::from(p.r * self.width + p.c))
            .sum();
        (sum.rem_euclid(i64::from(modulus))) as i32
    }

    pub fn contains(&self, board: &Board) -> bool {
        let key = self.fingerprint(board);
        match self.buckets.get(&key) {
            Some(bucket) => bucket.iter().any(|node| node.board() == board),
            None => false,
        }
    }

    pub fn insert(&mut self, node: &'arena SearchNode<'arena>) {
        let key = self.fingerprint(node.board());
        self.buckets.entry(key).or_default().push(node);
    }

    /// Per-bucket occupancy, for diagnostics only (mirrors the solver's
    /// own per-depth `Stats` counters).
    pub fn bucket_len(&self, board: &Board) -> usize {
        let key = self.fingerprint(board);
        self.buckets.get(&key).map_or(0, Vec::len)
    }
}
