use crate::domain::depth::{
    AxisRenderer, ChartRenderer, DepthFrame, DepthTransformService, MIN_SPAN, TransformInput,
};
use crate::domain::events::{DepthEvent, EventDispatcher, InMemoryEventDispatcher};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{BookAnalysisService, BookSnapshot, CumulativePoint};
use crate::format_utils::format_volume;
use crate::{log_debug, log_warn};

/// Injected price label formatter; the engine never formats prices itself.
pub type PriceFormatter = Box<dyn Fn(f64) -> String>;

/// The depth transform engine. Exclusively owns the current snapshot and all
/// derived curve/window state, and pushes pixel coordinates to the chart and
/// axis collaborators after every mutation. All recomputation is synchronous;
/// a mutator returns only after the derived state is current.
pub struct DepthChartService<C: ChartRenderer, A: AxisRenderer> {
    chart: C,
    axis: A,
    transform: DepthTransformService,
    analysis: BookAnalysisService,
    dispatcher: InMemoryEventDispatcher,

    snapshot: BookSnapshot,
    prices: Vec<f64>,
    merged: Vec<CumulativePoint>,
    price_labels: Vec<String>,
    volume_labels: Vec<String>,

    span: f64,
    indicative_price: f64,
    mid_price: f64,

    price_format: PriceFormatter,
    frame: Option<DepthFrame>,
    destroyed: bool,
}

impl<C: ChartRenderer, A: AxisRenderer> DepthChartService<C, A> {
    pub fn new(chart: C, axis: A, price_format: PriceFormatter) -> Self {
        Self {
            chart,
            axis,
            transform: DepthTransformService::new(),
            analysis: BookAnalysisService::new(),
            dispatcher: InMemoryEventDispatcher::new(),
            snapshot: BookSnapshot::default(),
            prices: Vec::new(),
            merged: Vec::new(),
            price_labels: Vec::new(),
            volume_labels: Vec::new(),
            span: 1.0,
            indicative_price: 0.0,
            mid_price: 0.0,
            price_format,
            frame: None,
            destroyed: false,
        }
    }

    /// Register an observer for the zoom lifecycle events. Handlers run
    /// synchronously inside the publishing call and must not re-enter the
    /// engine.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&DepthEvent) + 'static,
    {
        self.dispatcher.subscribe_to_depth_events(handler);
    }

    /// Replace the book wholesale and rebuild every derived sequence: the
    /// sorted price ladder, the per-side cumulative curves merged by price,
    /// and both label caches.
    pub fn set_snapshot(&mut self, snapshot: BookSnapshot) -> Option<&DepthFrame> {
        self.snapshot = snapshot;
        self.prices = self.analysis.merged_prices(&self.snapshot);
        self.price_labels = self.prices.iter().map(|price| (self.price_format)(*price)).collect();
        self.merged = self.analysis.merged_cumulative(&self.snapshot);
        self.volume_labels =
            self.merged.iter().map(|point| format_volume(point.cumulative.value())).collect();

        self.recompute();
        self.render();
        self.frame.as_ref()
    }

    pub fn snapshot(&self) -> &BookSnapshot {
        &self.snapshot
    }

    /// Span is clamped to a small positive minimum; callers are responsible
    /// for sane values beyond that.
    pub fn set_span(&mut self, span: f64) -> Option<&DepthFrame> {
        self.span = if span.is_finite() { span.max(MIN_SPAN) } else { 1.0 };
        self.recompute();
        self.render();
        self.frame.as_ref()
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    /// `0` means "not in auction mode".
    pub fn set_indicative_price(&mut self, price: f64) -> Option<&DepthFrame> {
        self.indicative_price = price;
        self.recompute();
        self.render();
        self.frame.as_ref()
    }

    /// `0` means "no mid price fed"; the reference then falls back to the
    /// best-bid/best-ask average.
    pub fn set_mid_price(&mut self, price: f64) -> Option<&DepthFrame> {
        self.mid_price = price;
        self.recompute();
        self.render();
        self.frame.as_ref()
    }

    /// Derived state of the last successful recompute.
    pub fn frame(&self) -> Option<&DepthFrame> {
        self.frame.as_ref()
    }

    pub fn width(&self) -> u32 {
        self.chart.width()
    }

    pub fn height(&self) -> u32 {
        self.chart.height()
    }

    /// Show the live last-traded-price marker, independent of the reference.
    pub fn update_price(&mut self, price: f64) {
        self.axis.update_price(price);
    }

    pub fn clear_price(&mut self) {
        self.axis.clear_price();
    }

    /// Idempotent: delegates the paint to both collaborators, mutating no
    /// engine state.
    pub fn render(&mut self) {
        self.chart.render();
        self.axis.render();
    }

    /// Forwards the new viewport to both collaborators. Pixel mapping picks
    /// up the new size at the next recompute; callers re-set data or re-render
    /// afterwards.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.chart.resize(width, height);
        self.axis.resize(width, height);
    }

    /// Releases the axis collaborator's listeners and gesture capture. Safe
    /// to call more than once; only the first call tears anything down.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.axis.destroy();
    }

    pub fn zoom_started(&self) {
        self.dispatcher.publish_depth_event(DepthEvent::ZoomStarted);
    }

    /// Zoom factor and span are reciprocal by convention: a larger factor
    /// means more zoomed in, hence a narrower window. Triggers exactly one
    /// recompute and one render.
    pub fn apply_zoom(&mut self, factor: f64) -> Option<&DepthFrame> {
        if factor > 0.0 {
            self.span = (1.0 / factor).max(MIN_SPAN);
            self.recompute();
            self.render();
        }
        self.dispatcher.publish_depth_event(DepthEvent::ZoomChanged { factor });
        self.frame.as_ref()
    }

    pub fn zoom_ended(&self) {
        self.dispatcher.publish_depth_event(DepthEvent::ZoomEnded);
    }

    fn recompute(&mut self) {
        let input = TransformInput {
            snapshot: &self.snapshot,
            prices: &self.prices,
            merged: &self.merged,
            price_labels: &self.price_labels,
            volume_labels: &self.volume_labels,
            indicative_price: self.indicative_price,
            mid_price: self.mid_price,
            span: self.span,
            width: self.chart.width() as f64,
            height: self.chart.height() as f64,
            resolution: self.chart.resolution(),
        };

        match self.transform.transform(&input, self.price_format.as_ref()) {
            Some(frame) => {
                self.chart.update(&frame.buy_curve, &frame.sell_curve);
                if let Some(extent) = frame.zoom_extent {
                    self.axis.set_scale_extent(extent);
                }
                self.axis.update(&frame.axis);
                log_debug!(
                    LogComponent::Application("DepthChart"),
                    "recomputed frame: {} buy / {} sell points",
                    frame.buy_curve.len(),
                    frame.sell_curve.len()
                );
                self.frame = Some(frame);
            }
            None => {
                log_warn!(
                    LogComponent::Application("DepthChart"),
                    "no reference price derivable; skipping recompute"
                );
            }
        }
    }
}
