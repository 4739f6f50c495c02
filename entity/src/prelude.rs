pub use super::proposal_lock::Entity as ProposalLock;
