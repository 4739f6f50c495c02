//! Donator perk checks.
//!
//! Some commands are reserved for donors. A `PerksProvider` looks up which perks a user
//! has and `has_donator_perks` turns that into a pass/fail check for a named perk.

use serenity::all::UserId;
use serenity::async_trait;

use crate::server::{error::check::CheckError, model::perks::DonatorPerks};

/// Source of donor perks for users.
#[async_trait]
pub trait PerksProvider: Send + Sync {
    async fn get_perks(&self, user_id: UserId) -> DonatorPerks;
}

/// Provider granting every perk to everyone.
///
/// This is what the bot runs with while donor tiers are not enforced.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnrestrictedPerks;

#[async_trait]
impl PerksProvider for UnrestrictedPerks {
    async fn get_perks(&self, _user_id: UserId) -> DonatorPerks {
        DonatorPerks::unrestricted()
    }
}

/// Checks that a user has a donator perk.
///
/// # Arguments
/// - `provider` - Where to look the user's perks up
/// - `user_id` - User running the command
/// - `perk` - Name of the required perk
///
/// # Returns
/// - `Ok(u32)` - The perk's value
/// - `Err(CheckError::IsNotUpgradeChatSubscriber)` - The user lacks the perk
pub async fn has_donator_perks(
    provider: &dyn PerksProvider,
    user_id: UserId,
    perk: &str,
) -> Result<u32, CheckError> {
    let perks = provider.get_perks(user_id).await;

    perks.value(perk).ok_or_else(|| {
        tracing::debug!("User {} lacks donator perk {}", user_id, perk);
        CheckError::IsNotUpgradeChatSubscriber {
            perk: perk.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Provider returning a fixed perk set for every user.
    struct FixedPerks(DonatorPerks);

    #[async_trait]
    impl PerksProvider for FixedPerks {
        async fn get_perks(&self, _user_id: UserId) -> DonatorPerks {
            self.0.clone()
        }
    }

    /// Tests that the unrestricted provider passes any perk check.
    ///
    /// Expected: Ok for an arbitrary perk name
    #[tokio::test]
    async fn unrestricted_grants_everything() {
        let result = has_donator_perks(&UnrestrictedPerks, UserId::new(1), "max_children").await;

        assert!(result.is_ok());
    }

    /// Tests a user holding a non-zero perk.
    ///
    /// Expected: Ok with the perk's value
    #[tokio::test]
    async fn passes_with_granted_perk() {
        let provider = FixedPerks(DonatorPerks::new(HashMap::from([(
            "max_children".to_string(),
            30,
        )])));

        let result = has_donator_perks(&provider, UserId::new(1), "max_children").await;

        assert_eq!(result, Ok(30));
    }

    /// Tests a user whose perk is zero or missing.
    ///
    /// Expected: Err(IsNotUpgradeChatSubscriber) naming the perk
    #[tokio::test]
    async fn fails_without_perk() {
        let provider = FixedPerks(DonatorPerks::new(HashMap::from([(
            "stupidtree".to_string(),
            0,
        )])));

        let zero = has_donator_perks(&provider, UserId::new(1), "stupidtree").await;
        let missing = has_donator_perks(&provider, UserId::new(1), "max_children").await;

        assert_eq!(
            zero,
            Err(CheckError::IsNotUpgradeChatSubscriber {
                perk: "stupidtree".to_string()
            })
        );
        assert!(missing.is_err());
    }
}
