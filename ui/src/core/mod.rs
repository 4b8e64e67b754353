pub mod acquire;
pub mod charts;
pub mod format;
pub mod host;
pub mod payload;
pub mod summary;
