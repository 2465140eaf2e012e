pub mod depth;
pub mod errors;
pub mod events;
pub mod logging;
pub mod market_data;
