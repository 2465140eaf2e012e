use super::entities::{AxisFrame, DepthFrame};
use super::value_objects::{
    AXIS_HEIGHT, LinearScale, PixelPoint, PriceWindow, ReferencePrice, VolumeWindow, ZoomExtent,
};
use crate::domain::market_data::{BookAnalysisService, BookSnapshot, CumulativePoint, Side};

/// Inputs of one transform pass. The sorted ladder and the label caches are
/// rebuilt by the engine on snapshot changes only; everything else varies
/// with every mutation.
pub struct TransformInput<'a> {
    pub snapshot: &'a BookSnapshot,
    pub prices: &'a [f64],
    pub merged: &'a [CumulativePoint],
    pub price_labels: &'a [String],
    pub volume_labels: &'a [String],
    pub indicative_price: f64,
    pub mid_price: f64,
    pub span: f64,
    pub width: f64,
    pub height: f64,
    pub resolution: f64,
}

/// Domain service for the data-to-screen transform: cumulative curves in,
/// pixel-mapped polylines, ticks and zoom limits out.
pub struct DepthTransformService {
    analysis: BookAnalysisService,
}

impl DepthTransformService {
    pub fn new() -> Self {
        Self { analysis: BookAnalysisService::new() }
    }

    /// One full recompute pass. `None` when no reference price is derivable
    /// (empty book with neither indicative nor mid set); the caller skips the
    /// collaborator update instead of pushing NaN scales at them.
    pub fn transform(
        &self,
        input: &TransformInput<'_>,
        price_format: &dyn Fn(f64) -> String,
    ) -> Option<DepthFrame> {
        let reference =
            ReferencePrice::select(input.indicative_price, input.mid_price, input.snapshot)?;
        let center = reference.value();

        let deviation = self.analysis.max_abs_deviation(input.prices, center);
        let price_window = PriceWindow::around(center, deviation, input.span);

        // Volume headroom comes from the bars inside the window only.
        let visible_max = input
            .merged
            .iter()
            .filter(|point| price_window.contains(point.price.value()))
            .map(|point| point.cumulative.value())
            .fold(0.0, f64::max);
        let volume_window = VolumeWindow::from_visible_max(visible_max);

        let price_scale = LinearScale::new((price_window.low, price_window.high), (0.0, input.width));
        let chart_floor = input.height - input.resolution * AXIS_HEIGHT;
        let volume_scale = LinearScale::new((0.0, volume_window.max), (chart_floor, 0.0));

        let buy_curve = self.side_curve(
            &self.analysis.cumulative(&input.snapshot.buy),
            price_window.low,
            &price_scale,
            &volume_scale,
        );
        let sell_curve = self.side_curve(
            &self.analysis.cumulative(&input.snapshot.sell),
            price_window.high,
            &price_scale,
            &volume_scale,
        );

        let axis = AxisFrame {
            price_tick_offsets: input.prices.iter().map(|price| price_scale.map(*price)).collect(),
            volume_tick_offsets: input
                .merged
                .iter()
                .map(|point| volume_scale.map(point.cumulative.value()))
                .collect(),
            price_labels: input.price_labels.to_vec(),
            volume_labels: input.volume_labels.to_vec(),
            reference_offset: price_scale.map(center),
            reference_label: price_format(center),
            mode_label: reference.mode_label().to_string(),
            price_scale,
        };

        let zoom_extent = self.zoom_extent(input, center, deviation);

        Some(DepthFrame {
            reference,
            price_window,
            volume_window,
            buy_curve,
            sell_curve,
            axis,
            zoom_extent,
        })
    }

    /// Pixel polyline for one side, extended by a synthetic point at the
    /// window edge carrying the side's final cumulative volume, so the curve
    /// reaches the boundary even when the real data stops short.
    fn side_curve(
        &self,
        points: &[CumulativePoint],
        edge_price: f64,
        price_scale: &LinearScale,
        volume_scale: &LinearScale,
    ) -> Vec<PixelPoint> {
        let mut curve: Vec<PixelPoint> = points
            .iter()
            .map(|point| {
                PixelPoint::new(
                    price_scale.map(point.price.value()),
                    volume_scale.map(point.cumulative.value()),
                )
            })
            .collect();
        if let Some(last) = points.last() {
            curve.push(PixelPoint::new(
                price_scale.map(edge_price),
                volume_scale.map(last.cumulative.value()),
            ));
        }
        curve
    }

    /// Allowed zoom factor range: zooming in stops before the nearest
    /// observed level on either side of the reference price. The smaller of
    /// the two one-sided minimum gaps wins; one tenth of the deviation stands
    /// in when neither side has a positive gap. The upper factor is floored
    /// at the lower one, so a sparse book degenerates to `[1, 1]` and the
    /// interval never inverts.
    fn zoom_extent(
        &self,
        input: &TransformInput<'_>,
        center: f64,
        deviation: f64,
    ) -> Option<ZoomExtent> {
        if input.snapshot.buy.is_empty() || input.snapshot.sell.is_empty() {
            return None;
        }
        let below = self.analysis.min_positive_gap(input.prices, center, Side::Buy);
        let above = self.analysis.min_positive_gap(input.prices, center, Side::Sell);
        let min_gap = match (below, above) {
            (Some(a), Some(b)) => a.min(b),
            (Some(gap), None) | (None, Some(gap)) => gap,
            (None, None) => deviation / 10.0,
        };
        if min_gap <= 0.0 || deviation <= 0.0 {
            return None;
        }
        Some(ZoomExtent::new(1.0, (deviation / (2.0 * min_gap)).max(1.0)))
    }
}

impl Default for DepthTransformService {
    fn default() -> Self {
        Self::new()
    }
}
