//! Department Context - Entity

use super::DepartmentId;

/// 院系
///
/// 核心流程只读：按 id 查找，用于解析学生的院系引用。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Department {
    id: Option<DepartmentId>,
    pub name: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: DepartmentId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    pub fn id(&self) -> Option<DepartmentId> {
        self.id
    }
}
