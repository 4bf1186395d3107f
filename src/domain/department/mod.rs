//! Department Context - 院系（只读引用）

mod entity;
mod value_objects;

pub use entity::Department;
pub use value_objects::DepartmentId;
