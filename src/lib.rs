//! marriagebot
//!
//! Proposal coordination, donator perk checks and flavor text for the marriagebot
//! Discord bots, plus the HTTP application the binary serves next to them.

pub mod server;
