//! Student Context - 学生限界上下文
//!
//! 职责:
//! - 学生档案（姓名、联系方式、出生日期、地址）
//! - 学生与院系的多对一引用

mod aggregate;
mod value_objects;

pub use aggregate::Student;
pub use value_objects::StudentId;
