use super::value_objects::{
    LinearScale, PixelPoint, PriceWindow, ReferencePrice, VolumeWindow, ZoomExtent,
};
use serde::Serialize;

/// Everything the axis collaborator needs for one paint: pixel-mapped tick
/// positions, the label caches, the reference marker and the price scale for
/// placing the live last-traded-price marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisFrame {
    pub price_tick_offsets: Vec<f64>,
    pub volume_tick_offsets: Vec<f64>,
    pub price_labels: Vec<String>,
    pub volume_labels: Vec<String>,
    pub reference_offset: f64,
    pub reference_label: String,
    pub mode_label: String,
    pub price_scale: LinearScale,
}

/// Derived state of one recompute pass. Rebuilt wholesale on every mutation;
/// collaborators hold no copy beyond what the update call hands them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthFrame {
    pub reference: ReferencePrice,
    pub price_window: PriceWindow,
    pub volume_window: VolumeWindow,
    pub buy_curve: Vec<PixelPoint>,
    pub sell_curve: Vec<PixelPoint>,
    pub axis: AxisFrame,
    pub zoom_extent: Option<ZoomExtent>,
}
