use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::application::{DepthChartService, PriceFormatter};
use crate::domain::events::DepthEvent;
use crate::domain::market_data::BookSnapshot;
use crate::format_utils::default_price_format;
use crate::infrastructure::rendering::{CanvasAxisRenderer, CanvasChartRenderer};

type Engine = DepthChartService<CanvasChartRenderer, CanvasAxisRenderer>;

const WHEEL_ZOOM_STEP: f64 = 1.1;

/// JavaScript-facing depth chart API. Thin bridge over the application layer:
/// parses inputs, owns the wheel gesture listener and forwards everything
/// else to the engine.
#[wasm_bindgen]
pub struct DepthChartApi {
    engine: Rc<RefCell<Engine>>,
    axis_canvas: HtmlCanvasElement,
    wheel_closure: Option<Closure<dyn FnMut(web_sys::WheelEvent)>>,
}

#[wasm_bindgen]
impl DepthChartApi {
    /// Builds both canvas renderers and wires the wheel zoom gesture on the
    /// axis canvas. `price_format` is an optional `(price: number) => string`
    /// callback; a fixed two-decimal format stands in when absent.
    #[wasm_bindgen(constructor)]
    pub fn new(
        chart_canvas: HtmlCanvasElement,
        axis_canvas: HtmlCanvasElement,
        resolution: f64,
        width: u32,
        height: u32,
        price_format: Option<js_sys::Function>,
    ) -> Result<DepthChartApi, JsValue> {
        let formatter: PriceFormatter = match price_format {
            Some(callback) => Box::new(move |price: f64| {
                callback
                    .call1(&JsValue::NULL, &JsValue::from_f64(price))
                    .ok()
                    .and_then(|value| value.as_string())
                    .unwrap_or_else(|| default_price_format(price))
            }),
            None => Box::new(default_price_format),
        };

        let chart = CanvasChartRenderer::new(chart_canvas, resolution, width, height)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let axis = CanvasAxisRenderer::new(axis_canvas.clone(), resolution, width, height)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let engine = Rc::new(RefCell::new(DepthChartService::new(chart, axis, formatter)));

        let wheel_engine = Rc::clone(&engine);
        let wheel_closure = Closure::wrap(Box::new(move |event: web_sys::WheelEvent| {
            event.prevent_default();
            let mut engine = wheel_engine.borrow_mut();
            let current = 1.0 / engine.span();
            let mut factor = if event.delta_y() < 0.0 {
                current * WHEEL_ZOOM_STEP
            } else {
                current / WHEEL_ZOOM_STEP
            };
            if let Some(extent) = engine.frame().and_then(|frame| frame.zoom_extent) {
                factor = factor.clamp(extent.min, extent.max);
            }
            engine.zoom_started();
            engine.apply_zoom(factor);
            engine.zoom_ended();
        }) as Box<dyn FnMut(web_sys::WheelEvent)>);

        axis_canvas
            .add_event_listener_with_callback("wheel", wheel_closure.as_ref().unchecked_ref())?;

        Ok(DepthChartApi { engine, axis_canvas, wheel_closure: Some(wheel_closure) })
    }

    /// Replace the book from a JSON document of the form
    /// `{"buy": [{"price": 99, "volume": 10}], "sell": [...]}`.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(&self, json: &str) -> Result<(), JsValue> {
        let snapshot = BookSnapshot::from_json(json)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.engine.borrow_mut().set_snapshot(snapshot);
        Ok(())
    }

    /// Current book as JSON, mirroring the `setData` document shape.
    #[wasm_bindgen(js_name = dataJson)]
    pub fn data_json(&self) -> Option<String> {
        serde_json::to_string(self.engine.borrow().snapshot()).ok()
    }

    /// Register a `(name: string, factor: number | null) => void` observer
    /// for the zoom lifecycle; `name` is one of `zoomstart`, `zoom`,
    /// `zoomend` and `factor` accompanies `zoom` only.
    ///
    /// Dispatch is synchronous and runs inside the engine's mutation turn:
    /// an observer must not call back into this API from its handler, or it
    /// will hit the engine's exclusive borrow. Schedule follow-up calls
    /// (for example via a microtask) instead.
    #[wasm_bindgen(js_name = onZoomEvent)]
    pub fn on_zoom_event(&self, callback: js_sys::Function) {
        self.engine.borrow_mut().subscribe(move |event| {
            let (name, factor) = match event {
                DepthEvent::ZoomStarted => ("zoomstart", JsValue::NULL),
                DepthEvent::ZoomChanged { factor } => ("zoom", JsValue::from_f64(*factor)),
                DepthEvent::ZoomEnded => ("zoomend", JsValue::NULL),
            };
            let _ = callback.call2(&JsValue::NULL, &JsValue::from_str(name), &factor);
        });
    }

    #[wasm_bindgen(js_name = setSpan)]
    pub fn set_span(&self, span: f64) {
        self.engine.borrow_mut().set_span(span);
    }

    #[wasm_bindgen(js_name = setIndicativePrice)]
    pub fn set_indicative_price(&self, price: f64) {
        self.engine.borrow_mut().set_indicative_price(price);
    }

    #[wasm_bindgen(js_name = setMidPrice)]
    pub fn set_mid_price(&self, price: f64) {
        self.engine.borrow_mut().set_mid_price(price);
    }

    #[wasm_bindgen(js_name = updatePrice)]
    pub fn update_price(&self, price: f64) {
        self.engine.borrow_mut().update_price(price);
    }

    #[wasm_bindgen(js_name = clearPrice)]
    pub fn clear_price(&self) {
        self.engine.borrow_mut().clear_price();
    }

    pub fn render(&self) {
        self.engine.borrow_mut().render();
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.engine.borrow_mut().resize(width, height);
    }

    pub fn span(&self) -> f64 {
        self.engine.borrow().span()
    }

    pub fn zoom(&self) -> f64 {
        1.0 / self.engine.borrow().span()
    }

    pub fn width(&self) -> u32 {
        self.engine.borrow().width()
    }

    pub fn height(&self) -> u32 {
        self.engine.borrow().height()
    }

    /// Last derived frame as JSON, for debugging and host-side inspection.
    #[wasm_bindgen(js_name = frameJson)]
    pub fn frame_json(&self) -> Option<String> {
        let engine = self.engine.borrow();
        engine.frame().and_then(|frame| serde_json::to_string(frame).ok())
    }

    /// Detach the wheel listener and tear the engine down. Idempotent.
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        if let Some(closure) = self.wheel_closure.take() {
            self.axis_canvas.remove_event_listener_with_callback(
                "wheel",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        self.engine.borrow_mut().destroy();
        Ok(())
    }
}
