pub mod model;
pub mod service;

pub use model::{FALLBACK_LEVEL, LEVEL_KEYWORDS, LevelKeyword};
pub use service::LevelService;
