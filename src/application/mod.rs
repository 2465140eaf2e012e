pub mod depth_service;

pub use depth_service::*;
