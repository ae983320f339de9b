#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vaultscope Audit Engine
//!
//! The pure heart of the audit: grant normalization, the membership
//! index, and the aggregation join that turns a directory snapshot
//! into report rows. No I/O happens here; callers hand in a
//! [`DirectorySnapshot`](vaultscope_core::DirectorySnapshot) and get
//! rows and warnings back.

pub mod aggregate;
pub mod membership;
pub mod normalize;
mod proptests;

pub use aggregate::{AuditOutcome, run_audit};
pub use membership::MembershipIndex;
pub use normalize::normalize_grants;
