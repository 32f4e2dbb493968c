use std::fmt;

/// Visibility tiers, ordered from least to most trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Privilege {
    Public = 0,
    Member = 1,
    Core = 2,
    Admin = 3,
}

impl Privilege {
    pub fn level(self) -> i32 {
        self as i32
    }

    pub fn from_level(level: i32) -> Option<Self> {
        match level {
            0 => Some(Privilege::Public),
            1 => Some(Privilege::Member),
            2 => Some(Privilege::Core),
            3 => Some(Privilege::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Privilege::Public => "public",
            Privilege::Member => "member",
            Privilege::Core => "core",
            Privilege::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// Static chat id lists, one per tier above `Public`.
#[derive(Debug, Clone, Default)]
pub struct PrivilegeTable {
    pub admin_id: Option<i64>,
    pub admins: Vec<i64>,
    pub core: Vec<i64>,
    pub members: Vec<i64>,
}

impl PrivilegeTable {
    /// Highest tier whose list contains `chat_id`.
    pub fn classify(&self, chat_id: i64) -> Privilege {
        if self.admin_id == Some(chat_id) || self.admins.contains(&chat_id) {
            Privilege::Admin
        } else if self.core.contains(&chat_id) {
            Privilege::Core
        } else if self.members.contains(&chat_id) {
            Privilege::Member
        } else {
            Privilege::Public
        }
    }
}
