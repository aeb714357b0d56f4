use crate::balance::CampaignBalance;
use crate::constants::RECLAIM_WINDOW_SECONDS;
use crate::data::Status;
use soroban_sdk::{contracterror, Address};

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracterror]
pub enum Error {
    InvalidAmount = 1,
    EmptyTitle = 2,
    ProjectFullyFunded = 3,
    ProjectCanceled = 4,
    NotCreator = 5,
    NotFunded = 6,
    InsufficientFunds = 7,
    ProjectStillOpen = 8,
    NoContribution = 9,
    ContributorInsufficientBalance = 10,
    RecipientCannotReceivePayment = 11,
    InvalidPaymentData = 12,
}

impl Error {
    /// Human readable reason, shared with existing integrations.
    ///
    /// Funded and canceled campaigns reject contributions with the same text.
    pub fn message(&self) -> &'static str {
        match self {
            Error::InvalidAmount => "Amount must be greater than zero",
            Error::EmptyTitle => "Title must not be empty",
            Error::ProjectFullyFunded | Error::ProjectCanceled => "Project is fully funded",
            Error::NotCreator => "Only project creator can withdraw funds",
            Error::NotFunded => "Project is not fully funded yet",
            Error::InsufficientFunds => "Amount to withdraw exceeds contract funds",
            Error::ProjectStillOpen => "Project is still open",
            Error::NoContribution => "Address has not contributed",
            Error::ContributorInsufficientBalance => "Address balance is lower than amount",
            Error::RecipientCannotReceivePayment => "Token transfer was rejected",
            Error::InvalidPaymentData => "Token transfer data was invalid",
        }
    }
}

/// Macro for validation checks with early return on error
#[macro_export]
macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($($cond:expr, $err:expr),+) => {
        $(
            if !$cond {
                return Err($err);
            }
        )+
    };
}

/// Error for an operation that needs an open campaign.
fn closed_error(status: Status) -> Error {
    match status {
        Status::Canceled => Error::ProjectCanceled,
        _ => Error::ProjectFullyFunded,
    }
}

/// Validates constructor parameters for campaign creation
pub fn validate_constructor_params(target_amount: i128, title_len: u32) -> Result<(), Error> {
    require!(
        target_amount > 0, Error::InvalidAmount,
        title_len > 0, Error::EmptyTitle
    );
    Ok(())
}

/// Validates a contribution before any funds move
pub fn validate_contribution(
    amount: i128,
    status: Status,
    contributor_balance: i128,
) -> Result<(), Error> {
    require!(amount > 0, Error::InvalidAmount);
    require!(!status.is_closed(), closed_error(status));
    require!(
        contributor_balance >= amount,
        Error::ContributorInsufficientBalance
    );
    Ok(())
}

pub fn validate_creator(caller: &Address, creator: &Address) -> Result<(), Error> {
    require!(caller == creator, Error::NotCreator);
    Ok(())
}

/// Validates a creator withdrawal against the pooled funds
pub fn validate_creator_withdrawal(
    amount: i128,
    status: Status,
    campaign_balance: &CampaignBalance,
) -> Result<(), Error> {
    require!(
        status == Status::FullyFunded, Error::NotFunded,
        amount > 0, Error::InvalidAmount,
        amount <= campaign_balance.total_raised, Error::InsufficientFunds
    );
    Ok(())
}

/// Validates that a contributor may reclaim `contribution` at `now`
pub fn validate_reclaim(
    contribution: i128,
    status: Status,
    created_at: u64,
    now: u64,
) -> Result<(), Error> {
    require!(contribution > 0, Error::NoContribution);
    match status {
        Status::Canceled => Ok(()),
        Status::FullyFunded => Err(Error::ProjectFullyFunded),
        Status::Open => {
            require!(
                now.saturating_sub(created_at) >= RECLAIM_WINDOW_SECONDS,
                Error::ProjectStillOpen
            );
            Ok(())
        }
    }
}

pub fn validate_cancel(status: Status) -> Result<(), Error> {
    require!(!status.is_closed(), closed_error(status));
    Ok(())
}
