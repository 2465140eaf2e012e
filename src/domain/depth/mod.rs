//! Depth transform aggregate: visible windows, linear scales, derived frames
//! and the renderer collaborator contracts.

pub mod entities;
pub mod renderers;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use renderers::*;
pub use services::*;
pub use value_objects::*;
