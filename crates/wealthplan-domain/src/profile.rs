//! Household profile and family roster.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Whether the household plans around one earner or two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum IncomeMode {
    #[default]
    Individual,
    Joint,
}

impl IncomeMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            IncomeMode::Individual => IncomeMode::Joint,
            IncomeMode::Joint => IncomeMode::Individual,
        }
    }
}

impl fmt::Display for IncomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeMode::Individual => "Individual",
            IncomeMode::Joint => "Joint",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub relation: String,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, age: u32, relation: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            age,
            relation: relation.into(),
        }
    }
}

impl Identifiable for FamilyMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for FamilyMember {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.name, self.relation, self.age)
    }
}

/// Head-of-household details plus the family roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub income_mode: IncomeMode,
    #[serde(default)]
    pub family_members: Vec<FamilyMember>,
}

impl Profile {
    pub fn member(&self, id: &str) -> Option<&FamilyMember> {
        self.family_members.iter().find(|member| member.id == id)
    }

    pub fn member_mut(&mut self, id: &str) -> Option<&mut FamilyMember> {
        self.family_members.iter_mut().find(|member| member.id == id)
    }
}
