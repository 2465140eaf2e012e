use super::entities::AxisFrame;
use super::value_objects::{PixelPoint, ZoomExtent};

/// Pixel-drawing collaborator for the cumulative curves. Stateless beyond the
/// polylines last handed to `update`; the engine reads the output viewport
/// back through `width`/`height`/`resolution`.
pub trait ChartRenderer {
    fn update(&mut self, buy_curve: &[PixelPoint], sell_curve: &[PixelPoint]);
    fn render(&mut self);
    fn resize(&mut self, width: u32, height: u32);
    fn destroy(&mut self);
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn resolution(&self) -> f64;
}

/// Axis collaborator: tick strip, reference marker and the live last-traded
/// price marker, which is independent of the reference price. Browser
/// implementations also own pan/zoom gesture capture.
pub trait AxisRenderer {
    fn update(&mut self, frame: &AxisFrame);
    fn set_scale_extent(&mut self, extent: ZoomExtent);
    fn update_price(&mut self, price: f64);
    fn clear_price(&mut self);
    fn render(&mut self);
    fn resize(&mut self, width: u32, height: u32);
    fn destroy(&mut self);
}
