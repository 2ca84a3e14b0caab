//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod hierarchy_repo;
pub mod item_repo;
pub mod project_repo;
pub mod sub_work_package_repo;
pub mod work_package_repo;

pub use hierarchy_repo::HierarchyRepo;
pub use item_repo::ItemRepo;
pub use project_repo::ProjectRepo;
pub use sub_work_package_repo::SubWorkPackageRepo;
pub use work_package_repo::WorkPackageRepo;
