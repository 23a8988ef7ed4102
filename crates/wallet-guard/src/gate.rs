use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::address;
use crate::clock::Clock;

/// Client readiness phase. Strictly forward-progressing:
/// Loading -> Hydrating -> Ready -> Secure.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum HydrationPhase {
    #[default]
    Loading,
    Hydrating,
    Ready,
    Secure,
}

/// Why an interaction was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenyReason {
    NotHydrated,
    InvalidIdentity,
    RateLimited,
}

impl DenyReason {
    /// Fixed human-readable rendering for UI display.
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::NotHydrated => "not hydrated",
            DenyReason::InvalidIdentity => "invalid identity",
            DenyReason::RateLimited => "rate limited",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory result of an interaction check. Never an error: callers decide
/// whether to block the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityCheck {
    Permitted,
    Denied(DenyReason),
}

impl SecurityCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, SecurityCheck::Permitted)
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            SecurityCheck::Permitted => None,
            SecurityCheck::Denied(reason) => Some(*reason),
        }
    }
}

/// Gate timing configuration. The phase delays are cumulative offsets from
/// hydration start; the cooldown is the minimum time between two permitted
/// actions for one (identity, action) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Delay from hydration start until the Hydrating phase, in milliseconds.
    pub hydrating_delay_ms: u64,
    /// Further delay until Ready.
    pub ready_delay_ms: u64,
    /// Further delay until Secure.
    pub secure_delay_ms: u64,
    /// Cooldown window per (identity, action) pair.
    pub cooldown_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            hydrating_delay_ms: 100,
            ready_delay_ms: 300,
            secure_delay_ms: 200,
            cooldown_ms: 1000,
        }
    }
}

/// Security gate for wallet-sensitive actions. Callers construct and own one
/// instance per session; a parallel host wraps it in a mutex.
pub struct SecurityGate<C> {
    config: GateConfig,
    clock: C,
    started_at: Option<u64>,
    last_permitted: BTreeMap<(String, String), u64>,
}

impl<C: Clock> SecurityGate<C> {
    pub fn new(config: GateConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            started_at: None,
            last_permitted: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Begin the phase sequence. Idempotent: repeated calls keep the
    /// original start time, so the phase cannot regress.
    pub fn mark_hydration_started(&mut self) {
        if self.started_at.is_none() {
            let now = self.clock.now_millis();
            self.started_at = Some(now);
            debug!(now, "hydration started");
        }
    }

    /// Current phase, derived from elapsed time since hydration start.
    /// Deriving from the clock instead of mutating on timer callbacks keeps
    /// the sequence monotone and needs no timer cancellation on teardown.
    pub fn phase(&self) -> HydrationPhase {
        let Some(started_at) = self.started_at else {
            return HydrationPhase::Loading;
        };
        let elapsed = self.clock.now_millis().saturating_sub(started_at);
        let hydrating = self.config.hydrating_delay_ms;
        let ready = hydrating + self.config.ready_delay_ms;
        let secure = ready + self.config.secure_delay_ms;
        if elapsed >= secure {
            HydrationPhase::Secure
        } else if elapsed >= ready {
            HydrationPhase::Ready
        } else if elapsed >= hydrating {
            HydrationPhase::Hydrating
        } else {
            HydrationPhase::Loading
        }
    }

    /// Check whether a wallet action may proceed. Identity format is checked
    /// first (a malformed identity is reported in every phase), then phase,
    /// then the per-pair cooldown. A permit records the current time for the
    /// (identity, action) pair.
    pub fn validate_interaction(&mut self, identity: &str, action: &str) -> SecurityCheck {
        if !address::is_valid_address(identity) {
            debug!(identity, action, "denied: invalid identity");
            return SecurityCheck::Denied(DenyReason::InvalidIdentity);
        }
        if self.phase() < HydrationPhase::Secure {
            debug!(identity, action, phase = ?self.phase(), "denied: not hydrated");
            return SecurityCheck::Denied(DenyReason::NotHydrated);
        }
        let now = self.clock.now_millis();
        let key = (identity.to_string(), action.to_string());
        if let Some(&last) = self.last_permitted.get(&key) {
            if now.saturating_sub(last) < self.config.cooldown_ms {
                debug!(identity, action, "denied: rate limited");
                return SecurityCheck::Denied(DenyReason::RateLimited);
            }
        }
        self.last_permitted.insert(key, now);
        debug!(identity, action, "permitted");
        SecurityCheck::Permitted
    }

    /// Clear all recorded action timestamps. Phase is unaffected.
    pub fn reset(&mut self) {
        self.last_permitted.clear();
    }
}
