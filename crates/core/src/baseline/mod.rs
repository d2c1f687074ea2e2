pub mod baseline;
pub mod trend;
