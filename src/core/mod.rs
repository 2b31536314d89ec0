pub mod classify;
pub mod report;
