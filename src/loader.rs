//! Text-file order source feeding the table's bulk load.
//!
//! One order per line, whitespace separated. An unopenable source is an
//! error and leaves the caller's table untouched; a malformed line is not
//! an error, it terminates the parsed sequence the way stream extraction
//! does, and everything before it is kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::order::Order;
use crate::table::OrderTable;

/// Bulk-load failure. Parse problems never surface here; they end the
/// sequence instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read order source: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses orders from the file at `path` until end of file or the first
/// malformed line, whichever comes first. Blank lines are skipped.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut orders = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Order>() {
            Ok(order) => orders.push(order),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    line = lineno + 1,
                    %err,
                    "stopping order parse at malformed line"
                );
                break;
            }
        }
    }
    debug!(path = %path.display(), count = orders.len(), "parsed order source");
    Ok(orders)
}

/// Loads the file at `path` into `table` via its silent-skip bulk insert.
/// Returns how many orders were inserted; duplicates of ids already in the
/// table, or repeated within the file, are dropped.
pub fn fill_from_path(table: &mut OrderTable, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let orders = load_orders(path)?;
    let parsed = orders.len();
    let inserted = table.fill(orders);
    if inserted < parsed {
        debug!(
            skipped = parsed - inserted,
            "duplicate order ids skipped during fill"
        );
    }
    Ok(inserted)
}
