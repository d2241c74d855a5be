pub mod assignments;
pub mod levels;
pub mod projection;
pub mod rooms;
pub mod schedule;
pub mod subjects;
