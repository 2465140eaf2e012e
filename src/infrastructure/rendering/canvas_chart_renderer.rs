use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette;
use crate::domain::depth::{AXIS_HEIGHT, ChartRenderer, PixelPoint};
use crate::domain::errors::{AppError, RenderingResult};

/// Canvas 2D implementation of the curve renderer. Paints each side as a
/// filled area down to the chart floor plus a brighter outline on top.
pub struct CanvasChartRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    resolution: f64,
    buy_curve: Vec<PixelPoint>,
    sell_curve: Vec<PixelPoint>,
}

impl CanvasChartRenderer {
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
            buy_curve: Vec::new(),
            sell_curve: Vec::new(),
        })
    }

    fn chart_floor(&self) -> f64 {
        self.height as f64 - self.resolution * AXIS_HEIGHT
    }

    fn paint_side(&self, curve: &[PixelPoint], fill: &str, stroke: &str) {
        let Some(first) = curve.first() else {
            return;
        };
        let floor = self.chart_floor();

        self.context.set_fill_style(&JsValue::from(fill));
        self.context.begin_path();
        self.context.move_to(first.x, floor);
        for point in curve {
            self.context.line_to(point.x, point.y);
        }
        if let Some(last) = curve.last() {
            self.context.line_to(last.x, floor);
        }
        self.context.close_path();
        self.context.fill();

        self.context.set_stroke_style(&JsValue::from(stroke));
        self.context.set_line_width(self.resolution);
        self.context.begin_path();
        self.context.move_to(first.x, first.y);
        for point in &curve[1..] {
            self.context.line_to(point.x, point.y);
        }
        self.context.stroke();
    }
}

impl ChartRenderer for CanvasChartRenderer {
    fn update(&mut self, buy_curve: &[PixelPoint], sell_curve: &[PixelPoint]) {
        self.buy_curve = buy_curve.to_vec();
        self.sell_curve = sell_curve.to_vec();
    }

    fn render(&mut self) {
        let width = self.width as f64;
        let height = self.height as f64;

        self.context.clear_rect(0.0, 0.0, width, height);
        self.context.set_fill_style(&JsValue::from(palette::BACKGROUND));
        self.context.fill_rect(0.0, 0.0, width, height);

        self.paint_side(&self.buy_curve, palette::GREEN_TRANSPARENT, palette::GREEN);
        self.paint_side(&self.sell_curve, palette::RED_TRANSPARENT, palette::RED);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn destroy(&mut self) {
        self.buy_curve.clear();
        self.sell_curve.clear();
        self.context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}
