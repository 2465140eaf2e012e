use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette;
use crate::domain::depth::{AXIS_HEIGHT, AxisFrame, AxisRenderer, ZoomExtent};
use crate::domain::errors::{AppError, RenderingResult};

const TICK_LENGTH: f64 = 4.0;
const LABEL_PADDING: f64 = 3.0;

/// Canvas 2D implementation of the axis renderer: tick strip along the bottom
/// edge, volume labels along the curve, the reference price marker and the
/// live last-traded-price marker.
pub struct CanvasAxisRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    resolution: f64,
    frame: AxisFrame,
    scale_extent: Option<ZoomExtent>,
    last_price: Option<f64>,
}

impl CanvasAxisRenderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        resolution: f64,
        width: u32,
        height: u32,
    ) -> RenderingResult<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::RenderingError("failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("failed to cast 2D context".to_string()))?;

        Ok(Self {
            canvas,
            context,
            width,
            height,
            resolution: if resolution > 0.0 { resolution } else { 1.0 },
            frame: AxisFrame::default(),
            scale_extent: None,
            last_price: None,
        })
    }

    /// Gesture capture is attached by the presentation layer.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn scale_extent(&self) -> Option<ZoomExtent> {
        self.scale_extent
    }

    fn axis_top(&self) -> f64 {
        self.height as f64 - self.resolution * AXIS_HEIGHT
    }

    fn label_font(&self) -> String {
        format!("{}px sans-serif", 10.0 * self.resolution)
    }

    fn paint_tick_strip(&self) {
        let axis_top = self.axis_top();

        self.context.set_fill_style(&JsValue::from(palette::GRAY));
        self.context.fill_rect(0.0, axis_top, self.width as f64, self.resolution * AXIS_HEIGHT);

        self.context.set_stroke_style(&JsValue::from(palette::GRAY_LIGHT));
        self.context.set_line_width(self.resolution);
        self.context.set_fill_style(&JsValue::from(palette::GRAY_LIGHT));
        self.context.set_font(&self.label_font());
        self.context.set_text_align("center");

        for (offset, label) in
            self.frame.price_tick_offsets.iter().zip(self.frame.price_labels.iter())
        {
            self.context.begin_path();
            self.context.move_to(*offset, axis_top);
            self.context.line_to(*offset, axis_top + TICK_LENGTH * self.resolution);
            self.context.stroke();
            let _ = self.context.fill_text(
                label,
                *offset,
                axis_top + (TICK_LENGTH + 10.0) * self.resolution,
            );
        }
    }

    fn paint_volume_labels(&self) {
        self.context.set_fill_style(&JsValue::from(palette::GRAY_LIGHT));
        self.context.set_font(&self.label_font());
        self.context.set_text_align("left");

        for (offset, label) in
            self.frame.volume_tick_offsets.iter().zip(self.frame.volume_labels.iter())
        {
            let _ = self.context.fill_text(label, LABEL_PADDING * self.resolution, *offset);
        }
    }

    fn paint_reference_marker(&self) {
        let offset = self.frame.reference_offset;
        let axis_top = self.axis_top();

        self.context.set_stroke_style(&JsValue::from(palette::GRAY_LIGHT));
        self.context.set_line_width(self.resolution);
        self.context.begin_path();
        self.context.move_to(offset, 0.0);
        self.context.line_to(offset, axis_top);
        self.context.stroke();

        self.context.set_fill_style(&JsValue::from(palette::WHITE));
        self.context.set_font(&self.label_font());
        self.context.set_text_align("center");
        let _ = self.context.fill_text(
            &self.frame.reference_label,
            offset,
            12.0 * self.resolution,
        );
        let _ =
            self.context.fill_text(&self.frame.mode_label, offset, 24.0 * self.resolution);
    }

    fn paint_last_price_marker(&self) {
        let Some(price) = self.last_price else {
            return;
        };
        let offset = self.frame.price_scale.map(price);
        let axis_top = self.axis_top();

        self.context.set_stroke_style(&JsValue::from(palette::VEGA_YELLOW));
        self.context.set_line_width(self.resolution);
        self.context.begin_path();
        self.context.move_to(offset, 0.0);
        self.context.line_to(offset, axis_top);
        self.context.stroke();
    }
}

impl AxisRenderer for CanvasAxisRenderer {
    fn update(&mut self, frame: &AxisFrame) {
        self.frame = frame.clone();
    }

    fn set_scale_extent(&mut self, extent: ZoomExtent) {
        self.scale_extent = Some(extent);
    }

    fn update_price(&mut self, price: f64) {
        self.last_price = Some(price);
    }

    fn clear_price(&mut self) {
        self.last_price = None;
    }

    fn render(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        self.paint_tick_strip();
        self.paint_volume_labels();
        self.paint_reference_marker();
        self.paint_last_price_marker();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn destroy(&mut self) {
        self.frame = AxisFrame::default();
        self.scale_extent = None;
        self.last_price = None;
        self.context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }
}
