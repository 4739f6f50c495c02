//! Donator perk domain model.

use std::collections::HashMap;

/// The donor-tier perks available to a user.
///
/// Perks are named; a perk is granted when its value is non-zero. An unrestricted set
/// grants every perk regardless of its recorded values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonatorPerks {
    values: HashMap<String, u32>,
    unrestricted: bool,
}

impl DonatorPerks {
    /// Creates a perk set from named perk values.
    pub fn new(values: HashMap<String, u32>) -> Self {
        Self {
            values,
            unrestricted: false,
        }
    }

    /// Creates a perk set that grants everything.
    pub fn unrestricted() -> Self {
        Self {
            values: HashMap::new(),
            unrestricted: true,
        }
    }

    /// Value of the named perk, if granted.
    ///
    /// An unrestricted set reports `u32::MAX` for perks it has no recorded value for.
    pub fn value(&self, perk: &str) -> Option<u32> {
        match self.values.get(perk).copied() {
            Some(value) if value > 0 => Some(value),
            _ if self.unrestricted => Some(u32::MAX),
            _ => None,
        }
    }

    /// Checks whether the named perk is granted.
    pub fn grants(&self, perk: &str) -> bool {
        self.value(perk).is_some()
    }
}
