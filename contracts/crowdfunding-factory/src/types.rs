use soroban_sdk::{contracttype, Address, Env, String};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                      // Factory admin address
    Token,                      // Token contract used for contributions
    Paused,                     // Whether campaign creation is paused
    NextCampaignId,             // Counter for campaign ids
    Campaign(u32),              // Campaign id -> Campaign
    Tiers(u32),                 // Campaign id -> Vec<Tier>
    Contribution(u32, Address), // (Campaign id, backer) -> contributed amount
    Backers(u32),               // Campaign id -> backer addresses, first-funding order
    CreatorCampaigns(Address),  // Creator -> campaign ids, creation order
    AllCampaigns,               // All campaign ids, creation order
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Campaign {
    pub id: u32,
    pub creator: Address,
    pub name: String,
    pub description: String,
    pub goal: i128,    // In the token's smallest unit
    pub deadline: u64, // Ledger timestamp
    pub balance: i128,
    pub next_tier_id: u32,
    pub withdrawn: bool,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tier {
    pub id: u32,
    pub name: String,
    pub amount: i128, // Exact contribution amount for this tier
    pub backers: u32,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CampaignState {
    Active,
    Successful,
    Failed,
}

impl Campaign {
    /// Outcome derived from stored fields and the ledger clock on every call.
    /// A withdrawn campaign stays Successful so it can never read as Active
    /// again and accept funds after the payout.
    pub fn state(&self, env: &Env) -> CampaignState {
        if self.withdrawn || self.balance >= self.goal {
            CampaignState::Successful
        } else if env.ledger().timestamp() > self.deadline {
            CampaignState::Failed
        } else {
            CampaignState::Active
        }
    }
}
