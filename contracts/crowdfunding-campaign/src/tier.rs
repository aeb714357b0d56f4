use soroban_sdk::contracttype;

use crate::constants::{GOLD_TARGET_DIVISOR, SILVER_TARGET_DIVISOR};

/// Contributor classification carried by the tier token.
///
/// Discriminants are the token type ids returned by `get_type`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
#[contracttype]
pub enum Tier {
    Gold = 0,
    Silver = 1,
    Bronze = 2,
}

impl Tier {
    /// Rank where a higher value means a better tier.
    pub fn rank(&self) -> u32 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TierThresholds {
    pub silver: i128,
    pub gold: i128,
}

impl TierThresholds {
    pub fn from_target(target_amount: i128) -> Self {
        TierThresholds {
            silver: target_amount / SILVER_TARGET_DIVISOR,
            gold: target_amount / GOLD_TARGET_DIVISOR,
        }
    }
}

/// Tier token as returned to a contributor after each contribution.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TierToken {
    pub token_id: u32,
    pub tier: Tier,
}

pub fn classify(cumulative: i128, thresholds: &TierThresholds) -> Tier {
    match cumulative {
        c if c >= thresholds.gold => Tier::Gold,
        c if c >= thresholds.silver => Tier::Silver,
        _ => Tier::Bronze,
    }
}
