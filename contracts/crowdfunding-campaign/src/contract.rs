use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};
use stellar_access::ownable::{self as ownable};
use stellar_tokens::non_fungible::Base;

use crate::balance::CampaignBalance;
use crate::constants::RECLAIM_WINDOW_SECONDS;
use crate::data::{
    CampaignData, CampaignParams, Contributed, ContributorWithdraw, CreatorWithdraw, Status,
};
use crate::tier::{self, Tier, TierToken};
use crate::validation::{self, Error};

use crate::storage as Storage;

fn get_token<'a>(env: &'a Env, campaign_data: &CampaignData) -> TokenClient<'a> {
    token::Client::new(env, &campaign_data.token)
}

fn get_creator(env: &Env) -> Address {
    ownable::get_owner(env).unwrap_or_else(|| panic!("Campaign creator is not set"))
}

/// Sends `amount` of the funding token from the campaign to `to`.
fn pay_out(env: &Env, tk: &TokenClient, to: &Address, amount: &i128) -> Result<(), Error> {
    tk.try_transfer(&env.current_contract_address(), to, amount)
        .map_err(|_| Error::RecipientCannotReceivePayment)?
        .map_err(|_| Error::InvalidPaymentData)?;
    Ok(())
}

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Creates the campaign.
    ///
    /// The creator becomes the contract owner and the only address allowed to
    /// withdraw the pool once it is fully funded. The campaign starts `Open`
    /// and the reclaim window starts at the current ledger timestamp.
    ///
    /// # Parameters
    ///
    /// * `env` - The execution environment provided by Soroban.
    /// * `creator` - The campaign creator (requires authentication).
    /// * `token_addr` - The token contract address used for all contributions.
    /// * `uri`, `name`, `symbol` - Metadata of the tier token collection.
    /// * `params` - Title and target amount.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` if the target amount is not positive.
    /// * `EmptyTitle` if the title is empty.
    pub fn __constructor(
        env: Env,
        creator: Address,
        token_addr: Address,
        uri: String,
        name: String,
        symbol: String,
        params: CampaignParams,
    ) -> Result<(), Error> {
        creator.require_auth();
        validation::validate_constructor_params(params.target_amount, params.title.len())?;

        ownable::set_owner(&env, &creator);
        let campaign_data =
            CampaignData::from_campaign_params(&params, token_addr, env.ledger().timestamp());

        Base::set_metadata(&env, uri, name, symbol);
        Storage::update_campaign_data(&env, &campaign_data);
        Storage::update_campaign_balance(&env, &CampaignBalance::new());

        log!(&env, "campaign created", creator, params.target_amount);
        Ok(())
    }

    /// Contributes `amount` tokens to the campaign.
    ///
    /// Transfers the tokens to the contract and adds them to the contributor's
    /// entry. The first contribution of an address mints its tier token; every
    /// contribution reclassifies that token from the new cumulative amount.
    /// The contribution that brings the pool to the target closes funding.
    ///
    /// # Returns
    ///
    /// * The contributor's `TierToken` after this contribution.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` if amount is not positive.
    /// * `ProjectFullyFunded` or `ProjectCanceled` if funding is closed.
    /// * `ContributorInsufficientBalance` if the contributor doesn't have enough tokens.
    /// * `RecipientCannotReceivePayment` or `InvalidPaymentData` if the transfer fails.
    pub fn contribute_to_project(
        env: Env,
        contributor: Address,
        amount: i128,
    ) -> Result<TierToken, Error> {
        contributor.require_auth();
        let mut campaign_data = Storage::get_campaign_data(&env);
        let tk = get_token(&env, &campaign_data);

        validation::validate_contribution(amount, campaign_data.status, tk.balance(&contributor))?;

        tk.try_transfer(&contributor, env.current_contract_address(), &amount)
            .map_err(|_| Error::RecipientCannotReceivePayment)?
            .map_err(|_| Error::InvalidPaymentData)?;

        let contribution = Storage::get_contribution(&env, &contributor) + amount;
        Storage::set_contribution(&env, &contributor, contribution);

        let token_id = match Storage::get_tier_token(&env, &contributor) {
            Some(token_id) => token_id,
            None => {
                let token_id = Base::sequential_mint(&env, &contributor);
                Storage::set_tier_token(&env, &contributor, token_id);
                token_id
            }
        };
        let tier = tier::classify(contribution, &campaign_data.tier_thresholds);
        Storage::set_token_tier(&env, token_id, tier);

        let mut campaign_balance = Storage::get_balance_or_new(&env);
        campaign_balance.recalculate_from_contribution(&amount);
        Storage::update_campaign_balance(&env, &campaign_balance);

        if campaign_balance.target_reached(campaign_data.target_amount) {
            campaign_data.status = Status::FullyFunded;
            Storage::update_campaign_data(&env, &campaign_data);
            campaign_data.status.emit_event(&env);
            log!(&env, "campaign fully funded", campaign_balance.total_raised);
        }

        Contributed {
            contributor,
            amount,
            tier,
        }
        .publish(&env);
        campaign_balance.emit_event(&env);

        Ok(TierToken { token_id, tier })
    }

    /// Withdraws `amount` from the pool to the creator.
    ///
    /// Can be called repeatedly until the pool is empty.
    ///
    /// # Errors
    ///
    /// * `NotCreator` if `caller` is not the creator.
    /// * `NotFunded` if the campaign has not reached its target, whatever the amount.
    /// * `InvalidAmount` if amount is not positive.
    /// * `InsufficientFunds` if amount exceeds the pooled funds.
    /// * `RecipientCannotReceivePayment` or `InvalidPaymentData` if the transfer fails.
    pub fn creator_withdraw(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let creator = get_creator(&env);
        validation::validate_creator(&caller, &creator)?;

        let campaign_data = Storage::get_campaign_data(&env);
        let mut campaign_balance = Storage::get_balance_or_new(&env);
        validation::validate_creator_withdrawal(amount, campaign_data.status, &campaign_balance)?;

        campaign_balance.recalculate_from_creator_withdrawal(&amount);
        Storage::update_campaign_balance(&env, &campaign_balance);

        let tk = get_token(&env, &campaign_data);
        pay_out(&env, &tk, &creator, &amount)?;

        log!(&env, "creator withdrawal", amount, campaign_balance.total_raised);
        CreatorWithdraw {
            caller,
            creator,
            amount,
        }
        .publish(&env);
        campaign_balance.emit_event(&env);

        Ok(())
    }

    /// Returns the caller's whole contribution.
    ///
    /// Allowed once the campaign is canceled, or while it is still open after
    /// the 30 day reclaim window. A fully funded campaign never refunds.
    /// The caller keeps its tier token.
    ///
    /// # Errors
    ///
    /// * `NoContribution` if the caller has nothing to reclaim.
    /// * `ProjectStillOpen` if the campaign is open and inside the reclaim window.
    /// * `ProjectFullyFunded` if the campaign reached its target.
    /// * `RecipientCannotReceivePayment` or `InvalidPaymentData` if the transfer fails.
    pub fn contributor_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let campaign_data = Storage::get_campaign_data(&env);
        let amount = Storage::get_contribution(&env, &caller);

        validation::validate_reclaim(
            amount,
            campaign_data.status,
            campaign_data.created_at,
            env.ledger().timestamp(),
        )?;

        Storage::set_contribution(&env, &caller, 0_i128);
        let mut campaign_balance = Storage::get_balance_or_new(&env);
        campaign_balance.recalculate_from_contributor_refund(&amount);
        Storage::update_campaign_balance(&env, &campaign_balance);

        let tk = get_token(&env, &campaign_data);
        pay_out(&env, &tk, &caller, &amount)?;

        log!(&env, "contributor refund", caller, amount);
        ContributorWithdraw { caller, amount }.publish(&env);
        campaign_balance.emit_event(&env);

        Ok(())
    }

    /// Cancels the campaign so contributors can reclaim immediately.
    ///
    /// No funds move.
    ///
    /// # Errors
    ///
    /// * `NotCreator` if `caller` is not the creator.
    /// * `ProjectFullyFunded` or `ProjectCanceled` if funding is already closed.
    pub fn cancel_project(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        validation::validate_creator(&caller, &get_creator(&env))?;

        let mut campaign_data = Storage::get_campaign_data(&env);
        validation::validate_cancel(campaign_data.status)?;

        campaign_data.status = Status::Canceled;
        Storage::update_campaign_data(&env, &campaign_data);
        campaign_data.status.emit_event(&env);

        log!(&env, "campaign canceled");
        Ok(())
    }

    pub fn creator(env: Env) -> Address {
        get_creator(&env)
    }

    pub fn title(env: Env) -> String {
        Storage::get_campaign_data(&env).title
    }

    pub fn target_amount(env: Env) -> i128 {
        Storage::get_campaign_data(&env).target_amount
    }

    pub fn token(env: Env) -> Address {
        Storage::get_campaign_data(&env).token
    }

    pub fn created_at(env: Env) -> u64 {
        Storage::get_campaign_data(&env).created_at
    }

    /// Earliest timestamp at which contributors of an open campaign can reclaim.
    pub fn reclaim_opens_at(env: Env) -> u64 {
        Storage::get_campaign_data(&env).created_at + RECLAIM_WINDOW_SECONDS
    }

    pub fn status(env: Env) -> Status {
        Storage::get_campaign_data(&env).status
    }

    /// `true` once a contribution brought the pool to the target, even after
    /// the creator withdraws.
    pub fn fully_funded(env: Env) -> bool {
        Storage::get_campaign_data(&env).status == Status::FullyFunded
    }

    pub fn funding_closed(env: Env) -> bool {
        Storage::get_campaign_data(&env).status.is_closed()
    }

    pub fn canceled(env: Env) -> bool {
        Storage::get_campaign_data(&env).status == Status::Canceled
    }

    pub fn total_raised(env: Env) -> i128 {
        Storage::get_balance_or_new(&env).total_raised
    }

    pub fn get_campaign_balance(env: Env) -> CampaignBalance {
        Storage::get_balance_or_new(&env)
    }

    /// Amount currently recorded for `addr`, zero if it never contributed or
    /// already reclaimed.
    pub fn contributors(env: Env, addr: Address) -> i128 {
        Storage::get_contribution(&env, &addr)
    }

    /// Tier token id of `addr`, if it ever contributed.
    pub fn get_token(env: Env, addr: Address) -> Option<u32> {
        Storage::get_tier_token(&env, &addr)
    }

    /// Tier assigned to `token_id`.
    pub fn get_type(env: Env, token_id: u32) -> Option<Tier> {
        Storage::get_token_tier(&env, token_id)
    }

    pub fn tier_of(env: Env, addr: Address) -> Option<Tier> {
        Storage::get_tier_token(&env, &addr)
            .and_then(|token_id| Storage::get_token_tier(&env, token_id))
    }

    /// Owner of a minted tier token. Tier tokens cannot be transferred, so
    /// this is always the contributor it was minted to.
    pub fn tier_token_owner(env: Env, token_id: u32) -> Address {
        Base::owner_of(&env, token_id)
    }
}
