use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - price of a single book level
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - absolute size resting at one price, never cumulative
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - book side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Side {
    #[strum(serialize = "buy")]
    #[serde(rename = "buy")]
    Buy,

    #[strum(serialize = "sell")]
    #[serde(rename = "sell")]
    Sell,
}

/// A single order book level. Immutable once received.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub volume: Volume,
}

/// Derived point on one side's cumulative volume curve.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct CumulativePoint {
    pub price: Price,
    pub cumulative: Volume,
}
