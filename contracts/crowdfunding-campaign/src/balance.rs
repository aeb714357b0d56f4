use soroban_sdk::{contractevent, contracttype, Env};

/// Pooled funds held for the campaign.
///
/// `total_raised` is what is currently available; the other fields only grow
/// and keep `total_raised == received_so_far - creator_withdrawals - contributor_refunds`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignBalance {
    pub total_raised: i128,
    pub received_so_far: i128,
    pub creator_withdrawals: i128,
    pub contributor_refunds: i128,
}

#[contractevent(topics = ["CBUPDATED"])]
pub struct BalanceUpdated {
    pub total_raised: i128,
    pub received_so_far: i128,
    pub creator_withdrawals: i128,
    pub contributor_refunds: i128,
}

impl Default for CampaignBalance {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignBalance {
    pub fn new() -> Self {
        CampaignBalance {
            total_raised: 0_i128,
            received_so_far: 0_i128,
            creator_withdrawals: 0_i128,
            contributor_refunds: 0_i128,
        }
    }

    pub fn target_reached(&self, target_amount: i128) -> bool {
        self.total_raised >= target_amount
    }

    pub fn recalculate_from_contribution(&mut self, amount: &i128) {
        self.total_raised += amount;
        self.received_so_far += amount;
    }

    pub fn recalculate_from_creator_withdrawal(&mut self, amount: &i128) {
        self.total_raised -= amount;
        self.creator_withdrawals += amount;
    }

    pub fn recalculate_from_contributor_refund(&mut self, amount: &i128) {
        self.total_raised -= amount;
        self.contributor_refunds += amount;
    }

    /// Emits a BalanceUpdated event
    pub fn emit_event(&self, env: &Env) {
        BalanceUpdated {
            total_raised: self.total_raised,
            received_so_far: self.received_so_far,
            creator_withdrawals: self.creator_withdrawals,
            contributor_refunds: self.contributor_refunds,
        }
        .publish(env);
    }
}
