pub mod engine;
pub mod metric;
