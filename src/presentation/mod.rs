pub mod wasm_api;

pub use wasm_api::DepthChartApi;
