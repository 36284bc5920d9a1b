//! The order record and its text-line parsing.
//!
//! The table only ever looks at `id`; the remaining fields are payload that
//! travels with the record and is compared as a whole.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Integer key an order is stored and looked up under.
pub type OrderId = i64;

/// A single order record. `id` is the table key; everything else is payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub item: String,
    pub quantity: u32,
}

impl Order {
    pub fn new(id: OrderId, item: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            item: item.into(),
            quantity,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} x{}", self.id, self.item, self.quantity)
    }
}

/// Failure to parse one text line as an order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseOrderError {
    #[error("expected `<id> <item> <quantity>`, got {found} fields")]
    FieldCount { found: usize },
    #[error("invalid order id: {0}")]
    Id(std::num::ParseIntError),
    #[error("invalid quantity: {0}")]
    Quantity(std::num::ParseIntError),
}

impl FromStr for Order {
    type Err = ParseOrderError;

    /// Parses one whitespace-separated line: `<id> <item> <quantity>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        match fields.as_slice() {
            &[id, item, quantity] => Ok(Order {
                id: id.parse().map_err(ParseOrderError::Id)?,
                item: item.to_owned(),
                quantity: quantity.parse().map_err(ParseOrderError::Quantity)?,
            }),
            other => Err(ParseOrderError::FieldCount { found: other.len() }),
        }
    }
}
