// Domain layer: the value model and its classification tags. No I/O.

pub mod model;
pub mod tags;
