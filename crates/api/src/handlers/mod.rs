//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the
//! board. Handlers delegate to the repositories in `planboard_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod hierarchy;
pub mod item;
pub mod model;
pub mod pages;
