//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row, plus `Deserialize` input DTOs where the table is written to.

pub mod hierarchy;
pub mod item;
pub mod project;
pub mod sub_work_package;
pub mod work_package;
