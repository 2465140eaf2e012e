#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use depth_chart_wasm::application::{DepthChartService, PriceFormatter};
use depth_chart_wasm::domain::depth::{
    AxisFrame, AxisRenderer, ChartRenderer, PixelPoint, ZoomExtent,
};
use depth_chart_wasm::domain::market_data::{BookSnapshot, Price, PriceLevel, Volume};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 420;

/// Everything the engine pushed at its collaborators, in call order.
#[derive(Default)]
pub struct CallLog {
    pub chart_updates: Vec<(Vec<PixelPoint>, Vec<PixelPoint>)>,
    pub chart_renders: usize,
    pub chart_resizes: Vec<(u32, u32)>,
    pub chart_destroys: usize,
    pub axis_frames: Vec<AxisFrame>,
    pub axis_renders: usize,
    pub axis_resizes: Vec<(u32, u32)>,
    pub axis_destroys: usize,
    pub scale_extents: Vec<ZoomExtent>,
    pub price_updates: Vec<f64>,
    pub price_clears: usize,
}

pub struct RecordingChart {
    pub log: Rc<RefCell<CallLog>>,
    pub width: u32,
    pub height: u32,
}

impl ChartRenderer for RecordingChart {
    fn update(&mut self, buy_curve: &[PixelPoint], sell_curve: &[PixelPoint]) {
        self.log.borrow_mut().chart_updates.push((buy_curve.to_vec(), sell_curve.to_vec()));
    }

    fn render(&mut self) {
        self.log.borrow_mut().chart_renders += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.log.borrow_mut().chart_resizes.push((width, height));
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().chart_destroys += 1;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resolution(&self) -> f64 {
        1.0
    }
}

pub struct RecordingAxis {
    pub log: Rc<RefCell<CallLog>>,
}

impl AxisRenderer for RecordingAxis {
    fn update(&mut self, frame: &AxisFrame) {
        self.log.borrow_mut().axis_frames.push(frame.clone());
    }

    fn set_scale_extent(&mut self, extent: ZoomExtent) {
        self.log.borrow_mut().scale_extents.push(extent);
    }

    fn update_price(&mut self, price: f64) {
        self.log.borrow_mut().price_updates.push(price);
    }

    fn clear_price(&mut self) {
        self.log.borrow_mut().price_clears += 1;
    }

    fn render(&mut self) {
        self.log.borrow_mut().axis_renders += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().axis_resizes.push((width, height));
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().axis_destroys += 1;
    }
}

pub type TestEngine = DepthChartService<RecordingChart, RecordingAxis>;

pub fn engine_sized(width: u32, height: u32) -> (TestEngine, Rc<RefCell<CallLog>>) {
    let log = Rc::new(RefCell::new(CallLog::default()));
    let chart = RecordingChart { log: Rc::clone(&log), width, height };
    let axis = RecordingAxis { log: Rc::clone(&log) };
    let price_format: PriceFormatter = Box::new(|price| format!("{price:.2}"));
    (DepthChartService::new(chart, axis, price_format), log)
}

pub fn engine() -> (TestEngine, Rc<RefCell<CallLog>>) {
    engine_sized(WIDTH, HEIGHT)
}

pub fn level(price: f64, volume: f64) -> PriceLevel {
    PriceLevel::new(Price::from(price), Volume::from(volume))
}

/// Reference price is inferred at 100; the furthest level sits 4 away.
pub fn sample_book() -> BookSnapshot {
    BookSnapshot::new(
        vec![level(99.0, 10.0), level(98.0, 5.0), level(97.0, 20.0)],
        vec![level(101.0, 8.0), level(102.0, 4.0), level(104.0, 12.0)],
    )
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
