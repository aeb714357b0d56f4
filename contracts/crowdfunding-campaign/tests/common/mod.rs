#![allow(dead_code)]

pub use crowdfunding_campaign::contract::{CampaignContract, CampaignContractClient};
use crowdfunding_campaign::data::CampaignParams;
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

pub const TARGET: i128 = 1000;
pub const TITLE: &str = "Project 1";
pub const THIRTY_DAYS: u64 = 30 * 24 * 60 * 60;

pub struct TestData<'a> {
    pub client: CampaignContractClient<'a>,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub creator: Address,
    pub contributor: Address,
    pub other: Address,
}

pub fn campaign_params(e: &Env, title: &str, target_amount: i128) -> CampaignParams {
    CampaignParams {
        title: String::from_str(e, title),
        target_amount,
    }
}

pub fn create_campaign_contract<'a>(e: &Env, title: &str, target_amount: i128) -> TestData<'a> {
    e.mock_all_auths();

    let creator = Address::generate(e);
    let contributor = Address::generate(e);
    let other = Address::generate(e);
    let token_issuer = Address::generate(e);

    let sac = e.register_stellar_asset_contract_v2(token_issuer);
    let token_addr = sac.address();

    let contract_id = e.register(
        CampaignContract,
        (
            creator.clone(),
            token_addr.clone(),
            String::from_str(e, "https://campaign.example/tiers/"),
            String::from_str(e, "Campaign Tier"),
            String::from_str(e, "TIER"),
            campaign_params(e, title, target_amount),
        ),
    );

    TestData {
        client: CampaignContractClient::new(e, &contract_id),
        token: token::Client::new(e, &token_addr),
        token_admin: token::StellarAssetClient::new(e, &token_addr),
        creator,
        contributor,
        other,
    }
}

pub fn create_default_campaign<'a>(e: &Env) -> TestData<'a> {
    create_campaign_contract(e, TITLE, TARGET)
}

pub fn mint_and_contribute(test_data: &TestData, addr: &Address, amount: i128) {
    test_data.token_admin.mint(addr, &amount);
    test_data.client.contribute_to_project(addr, &amount);
}
