use super::value_objects::{Price, PriceLevel, Side};
use crate::domain::errors::AppError;
use serde::{Deserialize, Serialize};

/// The order book snapshot owned by the engine. Replaced wholesale on every
/// data assignment; there is no incremental patching. Buy levels descend from
/// the best bid, sell levels ascend from the best ask - the feed supplies
/// levels already ordered by proximity to the touch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    #[serde(default)]
    pub buy: Vec<PriceLevel>,
    #[serde(default)]
    pub sell: Vec<PriceLevel>,
}

impl BookSnapshot {
    pub fn new(buy: Vec<PriceLevel>, sell: Vec<PriceLevel>) -> Self {
        Self { buy, sell }
    }

    /// Parse a snapshot from its JSON wire form. Either side may be absent
    /// and defaults to empty.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|err| AppError::ValidationError(format!("invalid book snapshot: {err}")))
    }

    pub fn levels(&self, side: Side) -> &[PriceLevel] {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    /// Best (nearest-to-touch) price on a side, if the side has depth.
    pub fn touch(&self, side: Side) -> Option<Price> {
        self.levels(side).first().map(|level| level.price)
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }

    /// Every price from both sides, in feed order.
    pub fn all_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.buy.iter().chain(self.sell.iter()).map(|level| level.price.value())
    }
}
