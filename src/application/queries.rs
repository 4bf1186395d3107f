//! 应用层 - 学生查询条件
//!
//! 对应仓储的派生查询，每次只使用一个条件

use chrono::NaiveDate;
use std::fmt;

use crate::domain::department::DepartmentId;

/// 学生检索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentFilter {
    /// 邮箱精确匹配
    Email(String),
    /// 名字包含（忽略大小写）
    FirstNameContains(String),
    /// 姓氏精确匹配
    LastName(String),
    /// 邮箱包含
    EmailContains(String),
    /// 所属院系
    Department(DepartmentId),
    /// 出生日期晚于
    BornAfter(NaiveDate),
}

impl fmt::Display for StudentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(email) => write!(f, "email={}", email),
            Self::FirstNameContains(fragment) => write!(f, "firstName~{}", fragment),
            Self::LastName(name) => write!(f, "lastName={}", name),
            Self::EmailContains(fragment) => write!(f, "email~{}", fragment),
            Self::Department(id) => write!(f, "departmentId={}", id),
            Self::BornAfter(date) => write!(f, "dateOfBirth>{}", date),
        }
    }
}
