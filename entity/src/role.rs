use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "clubMember")]
    ClubMember,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ClubMember => "clubMember",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "clubMember" => Ok(Role::ClubMember),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Ordered set of roles, stored as a JSON array column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Roles(Vec<Role>);

impl Roles {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut set = Roles::default();
        for role in roles {
            set.add(role);
        }
        set
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Adds `role` if absent. Returns whether the set changed.
    pub fn add(&mut self, role: Role) -> bool {
        if self.contains(role) {
            return false;
        }
        self.0.push(role);
        true
    }

    pub fn merge(&mut self, other: &Roles) -> bool {
        let mut changed = false;
        for role in other.iter() {
            changed |= self.add(role);
        }
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}
