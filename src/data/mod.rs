pub mod dataset;
pub mod field;
