//! Department Context - Value Objects

use std::fmt;

/// 院系唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartmentId(i64);

impl DepartmentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DepartmentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_id_roundtrip() {
        let id = DepartmentId::from(3);
        assert_eq!(id, DepartmentId::new(3));
        assert_eq!(id.as_i64(), 3);
        assert_eq!(id.to_string(), "3");
    }
}
