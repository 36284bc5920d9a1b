//! order-table: a fixed-bucket, separately-chained hash table for order
//! records keyed by integer id.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the collision structure and the routing policy in small,
//!   independently testable layers instead of one tangled table type.
//! - Layers:
//!   - Chain: singly-linked, exclusively-owned record storage for one
//!     bucket; keyed insert/find/update/remove plus index-addressed
//!     helpers; O(1) length via an incrementally maintained count.
//!   - OrderTable: a fixed-length array of chains; routes every keyed
//!     operation through `bucket_index` and owns `rehash`, the only
//!     operation that changes the bucket count.
//!   - loader / display: collaborators around the core. The loader turns a
//!     text file into a sequence of orders for the table's bulk fill; the
//!     display module renders buckets without the core dictating text.
//!
//! Constraints
//! - Single-threaded: no interior mutability, no locking; callers hold
//!   `&mut` for writes.
//! - Exclusive ownership: the table owns its chains, each chain owns its
//!   nodes; cloning deep-copies transitively so no node is ever shared.
//! - Unique ids: each chain rejects duplicate ids and routing is
//!   deterministic, so an id appears at most once in the whole table.
//! - Fixed bucket count: resizing happens only through an explicit
//!   `rehash`, never automatically on load.
//!
//! Why this split?
//! - The chain knows nothing about hashing, so its list invariants can be
//!   exercised without a table; the table delegates every per-record
//!   operation and only adds routing and whole-structure work on top.
//! - `bucket_index` is a pure function of id and bucket count, never
//!   ambient table state, so the distribution policy is testable on its
//!   own.
//!
//! Failure semantics
//! - Key misses are `None`, duplicate keyed inserts are
//!   `InsertError::DuplicateKey`; neither partially mutates the structure.
//! - Zero bucket counts are programmer errors and panic at the API
//!   boundary; the hash is undefined without at least one bucket.
//! - An unreadable order source is a `LoadError` from the loader, reported
//!   before the table is touched.
//!
//! Notes and non-goals
//! - No persistence and no cross-thread sharing.
//! - No automatic resize policy: `load_factor` is exposed, acting on it is
//!   the caller's call.
//! - Within a bucket, records keep insertion order; rehash preserves the
//!   record set and per-old-bucket relative order, not table-wide FIFO.

pub mod chain;
pub mod display;
pub mod loader;
pub mod order;
pub mod table;

// Public surface
pub use chain::{Chain, InsertError};
pub use display::{chain_contents, table_view};
pub use loader::{fill_from_path, load_orders, LoadError};
pub use order::{Order, OrderId, ParseOrderError};
pub use table::{bucket_index, OrderTable, DEFAULT_BUCKETS};
