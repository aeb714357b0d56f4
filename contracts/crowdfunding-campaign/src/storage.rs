use crate::{
    balance::CampaignBalance,
    data::{CampaignData, DataKey},
    tier::Tier,
};
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17280;

// Instance storage: accessed frequently, moderate TTL
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS; // ~30 days
const INSTANCE_LIFETIME_THRESHOLD: u32 = 15 * DAY_IN_LEDGERS; // ~15 days

// Persistent storage: contributor entries, long TTL so refunds stay claimable
const PERSISTENT_BUMP_AMOUNT: u32 = 180 * DAY_IN_LEDGERS; // ~6 months
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 90 * DAY_IN_LEDGERS; // ~3 months

pub fn get_campaign_data(e: &Env) -> CampaignData {
    let campaign_data = e
        .storage()
        .instance()
        .get(&DataKey::CampaignData)
        .unwrap_or_else(|| panic!("Campaign data has expired"));

    bump_instance_ttl(e);
    campaign_data
}

pub fn update_campaign_data(e: &Env, campaign_data: &CampaignData) {
    e.storage()
        .instance()
        .set(&DataKey::CampaignData, campaign_data);
    bump_instance_ttl(e);
}

pub fn update_campaign_balance(e: &Env, campaign_balance: &CampaignBalance) {
    e.storage()
        .instance()
        .set(&DataKey::CampaignBalance, campaign_balance);
    bump_instance_ttl(e);
}

pub fn get_balance_or_new(e: &Env) -> CampaignBalance {
    let key = DataKey::CampaignBalance;
    e.storage().instance().get(&key).unwrap_or_default()
}

pub fn get_contribution(e: &Env, addr: &Address) -> i128 {
    let key = DataKey::Contribution(addr.clone());
    let contribution: Option<i128> = e.storage().persistent().get(&key);

    match contribution {
        Some(amount) => {
            bump_persistent_ttl(e, &key);
            amount
        }
        None => 0_i128,
    }
}

pub fn set_contribution(e: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Contribution(addr.clone());
    e.storage().persistent().set(&key, &amount);
    bump_persistent_ttl(e, &key);
}

pub fn get_tier_token(e: &Env, addr: &Address) -> Option<u32> {
    let key = DataKey::TierToken(addr.clone());
    let token_id: Option<u32> = e.storage().persistent().get(&key);

    if token_id.is_some() {
        bump_persistent_ttl(e, &key);
    }

    token_id
}

pub fn set_tier_token(e: &Env, addr: &Address, token_id: u32) {
    let key = DataKey::TierToken(addr.clone());
    e.storage().persistent().set(&key, &token_id);
    bump_persistent_ttl(e, &key);
}

pub fn get_token_tier(e: &Env, token_id: u32) -> Option<Tier> {
    let key = DataKey::TokenTier(token_id);
    let tier: Option<Tier> = e.storage().persistent().get(&key);

    if tier.is_some() {
        bump_persistent_ttl(e, &key);
    }

    tier
}

pub fn set_token_tier(e: &Env, token_id: u32, tier: Tier) {
    let key = DataKey::TokenTier(token_id);
    e.storage().persistent().set(&key, &tier);
    bump_persistent_ttl(e, &key);
}

fn bump_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent_ttl(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
