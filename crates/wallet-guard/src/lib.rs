//! Wallet interaction gating for the governance portal.
//!
//! Defers wallet-sensitive actions until client state has settled through a
//! fixed phase sequence (Loading -> Hydrating -> Ready -> Secure), validates
//! wallet address format, and throttles repeated actions per
//! (identity, action) pair. All checks are advisory and synchronous: the
//! gate reports, callers decide whether to block the action. Time comes
//! from an injected [`Clock`] so hosts and tests control it.

pub mod address;
pub mod clock;
pub mod gate;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::{DenyReason, GateConfig, HydrationPhase, SecurityCheck, SecurityGate};
