pub mod model;
pub mod service;

pub use model::ConflictResult;
pub use service::ScheduleService;
