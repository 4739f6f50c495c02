use thiserror::Error;

/// Failures of command checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The user does not have the donator perk a command requires.
    #[error("You need to be an UpgradeChat subscriber to use the {perk} perk")]
    IsNotUpgradeChatSubscriber {
        /// Name of the perk that was checked
        perk: String,
    },
}
