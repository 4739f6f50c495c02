//! SeaORM entity models for the marriagebot database.

pub mod prelude;

pub mod proposal_lock;
