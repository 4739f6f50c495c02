use crate::server::{
    data::proposal_lock::{DatabaseLockBackend, ProposalLockRepository},
    error::{lock::LockError, proposal::ProposalError},
    model::lock::LockHandle,
    service::proposal::lock::{LockBackend, ProposalLockSet},
};
use sea_orm::DbErr;
use serenity::all::UserId;
use std::sync::Arc;
use std::time::Duration;
use test_utils::builder::TestBuilder;

mod backend;
mod delete;
mod insert;
mod is_locked;

const TTL: Duration = Duration::from_secs(120);
