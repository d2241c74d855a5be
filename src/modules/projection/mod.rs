pub mod model;
pub mod service;

pub use model::{Catalogs, DisplayAssignment, DisplayEntry};
pub use service::ProjectionService;
