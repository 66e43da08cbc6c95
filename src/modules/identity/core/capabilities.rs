//! Permission bits held by a user.
//!
//! Stored as a non-negative integer mask. A user may hold several bits at once,
//! so checks test containment rather than equality.

use std::fmt;
use std::ops::BitOr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Employee,
    Manager,
}

impl Capability {
    pub fn name(self) -> &'static str {
        match self {
            Capability::Employee => "employee",
            Capability::Manager => "manager",
        }
    }

    fn bit(self) -> u32 {
        match self {
            Capability::Employee => Capabilities::EMPLOYEE.0,
            Capability::Manager => Capabilities::MANAGER.0,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid role mask {0}")]
pub struct InvalidRoleMask(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities(u32);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    pub const EMPLOYEE: Capabilities = Capabilities(1);
    pub const MANAGER: Capabilities = Capabilities(2);

    const ALL: [Capability; 2] = [Capability::Employee, Capability::Manager];

    pub fn from_role(role: i64) -> Result<Self, InvalidRoleMask> {
        u32::try_from(role)
            .map(Capabilities)
            .map_err(|_| InvalidRoleMask(role))
    }

    pub fn bits(self) -> i64 {
        i64::from(self.0)
    }

    pub fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Names of the known capabilities present, in a stable order.
    pub fn names(self) -> Vec<&'static str> {
        Self::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .map(Capability::name)
            .collect()
    }
}

impl From<Capability> for Capabilities {
    fn from(capability: Capability) -> Self {
        Capabilities(capability.bit())
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Self) -> Self::Output {
        Capabilities(self.0 | rhs.0)
    }
}
