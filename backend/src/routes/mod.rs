pub mod live;
pub mod report;
pub mod sessions;
pub mod spots;
