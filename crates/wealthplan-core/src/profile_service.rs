//! Profile details, family roster and income mode changes.

use wealthplan_domain::{FamilyMember, HouseholdLedger, IncomeMode, Profile};

use crate::{
    income_mode_service::{IncomeModeService, ReconciliationOutcome},
    CoreError,
};

pub struct ProfileService;

impl ProfileService {
    /// Applies `update` to the profile. When the closure changes the income
    /// mode, the income heads are reconciled for the new mode.
    pub fn update<F>(ledger: &mut HouseholdLedger, update: F) -> Option<ReconciliationOutcome>
    where
        F: FnOnce(&mut Profile),
    {
        let previous = ledger.profile.income_mode;
        update(&mut ledger.profile);
        let requested = ledger.profile.income_mode;
        if requested == previous {
            return None;
        }
        ledger.profile.income_mode = previous;
        IncomeModeService::switch_mode(ledger, requested)
    }

    pub fn set_income_mode(
        ledger: &mut HouseholdLedger,
        mode: IncomeMode,
    ) -> Option<ReconciliationOutcome> {
        IncomeModeService::switch_mode(ledger, mode)
    }

    /// Flips between individual and joint mode.
    pub fn toggle_income_mode(ledger: &mut HouseholdLedger) -> ReconciliationOutcome {
        let next = ledger.profile.income_mode.toggled();
        IncomeModeService::switch_mode(ledger, next).unwrap_or_default()
    }

    pub fn add_member(ledger: &mut HouseholdLedger, member: FamilyMember) -> String {
        let id = member.id.clone();
        ledger.profile.family_members.push(member);
        id
    }

    pub fn update_member<F>(ledger: &mut HouseholdLedger, id: &str, update: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut FamilyMember),
    {
        let member = ledger
            .profile
            .member_mut(id)
            .ok_or_else(|| CoreError::FamilyMemberNotFound(id.to_string()))?;
        update(member);
        Ok(())
    }

    pub fn remove_member(
        ledger: &mut HouseholdLedger,
        id: &str,
    ) -> Result<FamilyMember, CoreError> {
        let members = &mut ledger.profile.family_members;
        let position = members
            .iter()
            .position(|member| member.id == id)
            .ok_or_else(|| CoreError::FamilyMemberNotFound(id.to_string()))?;
        Ok(members.remove(position))
    }
}
