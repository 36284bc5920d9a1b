//! Rendering for chains and whole tables.
//!
//! The core structures define iteration order only; the text shapes live
//! here. Both adapters borrow and implement `Display`, so callers pick the
//! sink (`println!`, a log line, a test string).

use core::fmt;

use crate::chain::Chain;
use crate::table::OrderTable;

/// Renders a chain's orders front to back, ` -> ` separated; `(empty)` for
/// an empty chain.
pub fn chain_contents(chain: &Chain) -> ChainContents<'_> {
    ChainContents(chain)
}

pub struct ChainContents<'a>(&'a Chain);

impl fmt::Display for ChainContents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(empty)");
        }
        for (pos, order) in self.0.iter().enumerate() {
            if pos > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{order}")?;
        }
        Ok(())
    }
}

/// Renders one line per bucket in index order.
pub fn table_view(table: &OrderTable) -> TableView<'_> {
    TableView(table)
}

pub struct TableView<'a>(&'a OrderTable);

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, chain) in self.0.buckets().enumerate() {
            writeln!(f, "bucket {idx}: {}", chain_contents(chain))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;

    #[test]
    fn empty_chain_renders_placeholder() {
        let chain = Chain::new();
        assert_eq!(chain_contents(&chain).to_string(), "(empty)");
    }

    #[test]
    fn chain_renders_in_insertion_order() {
        let mut chain = Chain::new();
        chain.insert_rear(Order::new(3, "bolts", 2)).unwrap();
        chain.insert_rear(Order::new(8, "nuts", 5)).unwrap();
        assert_eq!(
            chain_contents(&chain).to_string(),
            "#3 bolts x2 -> #8 nuts x5"
        );
    }

    #[test]
    fn table_renders_one_line_per_bucket() {
        let mut table = OrderTable::with_buckets(3);
        table.insert(Order::new(3, "bolts", 2)).unwrap();
        table.insert(Order::new(4, "nuts", 5)).unwrap();
        assert_eq!(
            table_view(&table).to_string(),
            "bucket 0: #3 bolts x2\nbucket 1: #4 nuts x5\nbucket 2: (empty)\n"
        );
    }
}
