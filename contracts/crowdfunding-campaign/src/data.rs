use soroban_sdk::{contractevent, contracttype, Address, Env, String};

use crate::tier::{Tier, TierThresholds};

/// Funding status of the campaign.
///
/// `Open` moves to `FullyFunded` inside the contribution that reaches the
/// target, or to `Canceled` when the creator cancels. Both are terminal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracttype]
pub enum Status {
    Open = 1,
    FullyFunded = 2,
    Canceled = 3,
}

impl Status {
    pub fn is_closed(&self) -> bool {
        *self != Status::Open
    }

    /// Emits a StatusUpdated event
    pub fn emit_event(&self, env: &Env) {
        StatusUpdated { new_status: *self }.publish(env);
    }
}

#[contractevent(topics = ["STUPDATED"])]
pub struct StatusUpdated {
    pub new_status: Status,
}

#[contractevent(topics = ["CWITHDRAW"])]
pub struct CreatorWithdraw {
    pub caller: Address,
    pub creator: Address,
    pub amount: i128,
}

#[contractevent(topics = ["RWITHDRAW"])]
pub struct ContributorWithdraw {
    pub caller: Address,
    pub amount: i128,
}

#[contractevent(topics = ["CONTRIB"])]
pub struct Contributed {
    pub contributor: Address,
    pub amount: i128,
    pub tier: Tier,
}

#[contracttype]
pub struct CampaignParams {
    pub title: String,
    pub target_amount: i128,
}

#[contracttype]
pub struct CampaignData {
    pub token: Address,
    pub title: String,
    pub target_amount: i128,
    pub created_at: u64,
    pub status: Status,
    pub tier_thresholds: TierThresholds,
}

impl CampaignData {
    pub fn from_campaign_params(params: &CampaignParams, token: Address, created_at: u64) -> Self {
        CampaignData {
            token,
            title: params.title.clone(),
            target_amount: params.target_amount,
            created_at,
            status: Status::Open,
            tier_thresholds: TierThresholds::from_target(params.target_amount),
        }
    }
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    CampaignData,
    CampaignBalance,
    Contribution(Address),
    TierToken(Address),
    TokenTier(u32),
}
