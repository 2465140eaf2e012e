use super::entities::BookSnapshot;
use super::value_objects::{CumulativePoint, PriceLevel, Side, Volume};

/// Domain service for cumulative depth analysis of a book snapshot.
pub struct BookAnalysisService;

impl BookAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Running sum over one side's volumes. The output has the same length as
    /// the input and is non-decreasing for non-negative volumes.
    pub fn cumulative(&self, levels: &[PriceLevel]) -> Vec<CumulativePoint> {
        let mut running = 0.0;
        levels
            .iter()
            .map(|level| {
                running += level.volume.value();
                CumulativePoint::new(level.price, Volume::from(running))
            })
            .collect()
    }

    /// All prices from both sides merged and sorted ascending, irrespective
    /// of side. This is the labeled price axis.
    pub fn merged_prices(&self, snapshot: &BookSnapshot) -> Vec<f64> {
        let mut prices: Vec<f64> = snapshot.all_prices().collect();
        prices.sort_by(|a, b| a.total_cmp(b));
        prices
    }

    /// Both sides' cumulative sequences merged and sorted by price ascending.
    /// Each side is accumulated independently; the sides are never combined
    /// with each other.
    pub fn merged_cumulative(&self, snapshot: &BookSnapshot) -> Vec<CumulativePoint> {
        let mut merged = self.cumulative(&snapshot.buy);
        merged.extend(self.cumulative(&snapshot.sell));
        merged.sort_by(|a, b| a.price.value().total_cmp(&b.price.value()));
        merged
    }

    /// Largest absolute distance between the reference price and any known
    /// level; 0 when no prices are known.
    pub fn max_abs_deviation(&self, prices: &[f64], reference: f64) -> f64 {
        prices.iter().map(|price| (price - reference).abs()).fold(0.0, f64::max)
    }

    /// Smallest positive gap between the reference price and a level strictly
    /// on the given side of it: bids sit below the reference, offers above.
    /// `None` when no level sits on that side.
    pub fn min_positive_gap(&self, prices: &[f64], reference: f64, side: Side) -> Option<f64> {
        prices
            .iter()
            .map(|price| match side {
                Side::Buy => reference - price,
                Side::Sell => price - reference,
            })
            .filter(|gap| *gap > 0.0)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl Default for BookAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
