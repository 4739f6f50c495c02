//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot and the data layer. They work with domain models and
//! reach collaborators (lock backends, chat transports, perk providers) through traits.

pub mod perks;
pub mod proposal;
pub mod random_text;
