use std::fmt;

use serde::{Serialize, Serializer};

/// Interference order being measured. The two orders yield independent
/// estimates of the same ratio, averaged at the end of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Two,
    Four,
}

impl Order {
    pub const ALL: [Order; 2] = [Order::Two, Order::Four];

    pub fn n(self) -> u8 {
        match self {
            Order::Two => 2,
            Order::Four => 4,
        }
    }

    /// Nominal liquid-film ring diameter at this order, in cm.
    pub fn base_diameter(self) -> f64 {
        match self {
            Order::Two => 0.35,
            Order::Four => 0.50,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n())
    }
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.n())
    }
}
