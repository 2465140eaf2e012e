pub mod canvas_axis_renderer;
pub mod canvas_chart_renderer;

pub use canvas_axis_renderer::CanvasAxisRenderer;
pub use canvas_chart_renderer::CanvasChartRenderer;

/// Shared chart palette
pub mod palette {
    pub const GREEN: &str = "#26ff8a";
    pub const GREEN_TRANSPARENT: &str = "rgba(38, 255, 138, 0.3)";
    pub const RED: &str = "#ff2641";
    pub const RED_TRANSPARENT: &str = "rgba(255, 38, 65, 0.3)";
    pub const BACKGROUND: &str = "#000000";
    pub const GRAY_LIGHT: &str = "#cccccc";
    pub const GRAY: &str = "#494949";
    pub const VEGA_YELLOW: &str = "#daff0d";
    pub const WHITE: &str = "#ffffff";
}
