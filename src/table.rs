//! OrderTable: fixed-bucket hash table routing orders to chains by id.
//!
//! The table owns a `Vec<Chain>` of a fixed bucket count and routes every
//! keyed operation to exactly one chain via `bucket_index`. Combined with
//! each chain's duplicate rejection this yields global id uniqueness: an
//! order lives in the one chain its id hashes to, and at most once. The
//! bucket count only ever changes through `rehash`, which rebuilds the
//! bucket array and redistributes every stored order.

use crate::chain::{Chain, InsertError};
use crate::order::{Order, OrderId};

/// Default bucket count; a small prime spreads clustered sequential ids.
pub const DEFAULT_BUCKETS: usize = 23;

/// Maps an id to a bucket index in `0..buckets`.
///
/// Pure in both arguments so the distribution policy is testable without a
/// table instance. Uses the Euclidean remainder, so negative ids still land
/// in range instead of producing a negative remainder.
///
/// # Panics
///
/// Panics if `buckets` is zero.
pub fn bucket_index(id: OrderId, buckets: usize) -> usize {
    assert!(buckets > 0, "bucket count must be nonzero");
    id.rem_euclid(buckets as i64) as usize
}

/// Separately-chained hash table of orders keyed by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTable {
    buckets: Vec<Chain>,
}

impl OrderTable {
    /// Table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Table with exactly `buckets` empty chains.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero; a table must always have at least one
    /// bucket for `bucket_index` to be defined.
    pub fn with_buckets(buckets: usize) -> Self {
        assert!(buckets > 0, "bucket count must be nonzero");
        let mut chains = Vec::with_capacity(buckets);
        chains.resize_with(buckets, Chain::new);
        Self { buckets: chains }
    }

    fn chain(&self, id: OrderId) -> &Chain {
        &self.buckets[bucket_index(id, self.buckets.len())]
    }

    fn chain_mut(&mut self, id: OrderId) -> &mut Chain {
        let idx = bucket_index(id, self.buckets.len());
        &mut self.buckets[idx]
    }

    /// Inserts `order` into the chain its id hashes to. Rejects with
    /// `DuplicateKey` when the id is already stored anywhere in the table.
    pub fn insert(&mut self, order: Order) -> Result<(), InsertError> {
        self.chain_mut(order.id).insert_rear(order)
    }

    /// Borrow of the stored order with `id`, `None` if absent.
    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.chain(id).find(id)
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.chain(id).contains(id)
    }

    /// Replaces the stored payload for `order.id` in place. Returns the
    /// previous value, `None` if the id is absent.
    pub fn update(&mut self, order: Order) -> Option<Order> {
        self.chain_mut(order.id).update(order)
    }

    /// Removes and returns the order with `id`, `None` if absent.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.chain_mut(id).remove(id)
    }

    /// Inserts every order from `orders` in sequence order, silently
    /// skipping duplicate ids. Returns how many were inserted. There is no
    /// rollback: orders inserted before an interrupted source stay in.
    pub fn fill<I>(&mut self, orders: I) -> usize
    where
        I: IntoIterator<Item = Order>,
    {
        let mut inserted = 0;
        for order in orders {
            if self.insert(order).is_ok() {
                inserted += 1;
            }
        }
        inserted
    }

    /// Total number of stored orders, summed over all chains.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Chain::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Chain::is_empty)
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Stored orders per bucket. Rehashing is externally triggered; this is
    /// the number callers watch to decide when.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.buckets.len() as f64
    }

    /// Rebuilds the bucket array with `new_buckets` chains and reinserts
    /// every stored order.
    ///
    /// Orders are reinserted walking old buckets in index order, each chain
    /// front to back. Relative order within a new bucket therefore reflects
    /// that concatenation, not the table-wide original insertion order. The
    /// set of stored records is preserved exactly.
    ///
    /// # Panics
    ///
    /// Panics if `new_buckets` is zero.
    pub fn rehash(&mut self, new_buckets: usize) {
        assert!(new_buckets > 0, "bucket count must be nonzero");
        let old = core::mem::take(&mut self.buckets);
        self.buckets = Vec::with_capacity(new_buckets);
        self.buckets.resize_with(new_buckets, Chain::new);
        for chain in old {
            for order in chain {
                self.insert(order)
                    .expect("source table held unique ids, reinsert cannot collide");
            }
        }
    }

    /// Chains in bucket-index order; the display layer renders from this.
    pub fn buckets(&self) -> impl Iterator<Item = &Chain> {
        self.buckets.iter()
    }

    /// Every stored order: bucket index ascending, then chain insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.buckets.iter().flat_map(Chain::iter)
    }
}

impl Default for OrderTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Order> for OrderTable {
    /// Bulk load; duplicate ids in the source are silently dropped.
    fn extend<I: IntoIterator<Item = Order>>(&mut self, orders: I) {
        self.fill(orders);
    }
}
