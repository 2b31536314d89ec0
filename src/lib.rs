pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::InputSource, CliConfig};

pub use adapters::json::{decode_sequence, decode_value, parse_sequence};
pub use crate::core::classify::{
    all_same_shallow_kind, all_unique_real_types, classify, classify_all, count_by_real_type,
    shallow_kind, shallow_kinds,
};
pub use crate::core::report::{OutputFormat, TypeCount, TypeReport};
pub use domain::model::{Function, Object, ObjectOrigin, Primitive, Symbol, Value};
pub use domain::tags::{RealType, ShallowKind};
pub use utils::error::{Result, ValueKindsError};
