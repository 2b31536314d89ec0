// Adapters layer: conversions between external data formats and the domain model.

pub mod json;
