use crate::errors::{CampaignError, FactoryError, ValidationError};
use crate::events::{Funded, FundsWithdrawn, RefundIssued, TierAdded, TierRemoved};
use crate::types::{Campaign, CampaignState, DataKey, Tier};
use soroban_sdk::{panic_with_error, token, Address, Env, String, Symbol, Vec};

/// Appends a new tier and returns its id. Tier ids are never reused, so a
/// removed tier cannot remap another tier's handle.
pub fn add_tier(env: &Env, caller: Address, campaign_id: u32, name: String, amount: i128) -> u32 {
    let mut campaign = load_campaign(env, campaign_id);
    require_creator(env, &campaign, &caller);

    if name.is_empty() {
        panic_with_error!(env, ValidationError::TierNameCannotBeEmpty);
    }
    if amount <= 0 {
        panic_with_error!(env, ValidationError::TierAmountMustBeGreaterThanZero);
    }

    let tier_id = campaign.next_tier_id;
    campaign.next_tier_id += 1;

    let mut tiers = load_tiers(env, campaign_id);
    tiers.push_back(Tier {
        id: tier_id,
        name,
        amount,
        backers: 0,
    });
    save_tiers(env, campaign_id, &tiers);
    save_campaign(env, &campaign);

    env.events().publish(
        (Symbol::new(env, "tier_added"), campaign_id),
        TierAdded {
            campaign_id,
            tier_id,
            amount,
        },
    );

    tier_id
}

/// Deletes a tier. Prior backers keep their records and refund claims; only
/// future funding against this id is rejected.
pub fn remove_tier(env: &Env, caller: Address, campaign_id: u32, tier_id: u32) {
    let campaign = load_campaign(env, campaign_id);
    require_creator(env, &campaign, &caller);

    let mut tiers = load_tiers(env, campaign_id);
    let index = match tier_position(&tiers, tier_id) {
        Some(index) => index,
        None => panic_with_error!(env, CampaignError::InvalidTier),
    };
    tiers.remove(index);
    save_tiers(env, campaign_id, &tiers);

    env.events().publish(
        (Symbol::new(env, "tier_removed"), campaign_id),
        TierRemoved {
            campaign_id,
            tier_id,
        },
    );
}

/// Accepts an exact-amount contribution against a tier.
pub fn fund(env: &Env, contributor: Address, campaign_id: u32, tier_id: u32, amount: i128) {
    contributor.require_auth();

    let mut campaign = load_campaign(env, campaign_id);
    if campaign.state(env) != CampaignState::Active {
        panic_with_error!(env, CampaignError::CampaignNotActive);
    }

    let mut tiers = load_tiers(env, campaign_id);
    let index = match tier_position(&tiers, tier_id) {
        Some(index) => index,
        None => panic_with_error!(env, CampaignError::InvalidTier),
    };
    let mut tier = tiers.get_unchecked(index);

    if amount != tier.amount {
        panic_with_error!(env, CampaignError::IncorrectAmount);
    }

    // Collect the payment; the transfer panics and rolls back the whole
    // invocation if the contributor cannot cover it.
    token_client(env).transfer(&contributor, &env.current_contract_address(), &amount);

    campaign.balance = match campaign.balance.checked_add(amount) {
        Some(balance) => balance,
        None => panic_with_error!(env, CampaignError::AmountOverflow),
    };

    tier.backers += 1;
    tiers.set(index, tier);
    save_tiers(env, campaign_id, &tiers);

    let contribution_key = DataKey::Contribution(campaign_id, contributor.clone());
    let contributed: i128 = env
        .storage()
        .instance()
        .get(&contribution_key)
        .unwrap_or(0);
    let total = match contributed.checked_add(amount) {
        Some(total) => total,
        None => panic_with_error!(env, CampaignError::AmountOverflow),
    };
    env.storage().instance().set(&contribution_key, &total);

    // First contribution from this address: register it for refund iteration.
    if contributed == 0 {
        let mut backers = load_backers(env, campaign_id);
        backers.push_back(contributor.clone());
        env.storage()
            .instance()
            .set(&DataKey::Backers(campaign_id), &backers);
    }

    save_campaign(env, &campaign);

    env.events().publish(
        (Symbol::new(env, "funded"), campaign_id),
        Funded {
            campaign_id,
            backer: contributor,
            tier_id,
            amount,
        },
    );
}

/// Pays the full balance to the creator, at most once per campaign.
pub fn withdraw(env: &Env, caller: Address, campaign_id: u32) {
    let mut campaign = load_campaign(env, campaign_id);
    require_creator(env, &campaign, &caller);

    if campaign.withdrawn {
        panic_with_error!(env, CampaignError::AlreadyWithdrawn);
    }
    if campaign.state(env) != CampaignState::Successful {
        panic_with_error!(env, CampaignError::NotSuccessful);
    }

    // Settle the ledger before the outbound transfer.
    let amount = campaign.balance;
    campaign.balance = 0;
    campaign.withdrawn = true;
    save_campaign(env, &campaign);

    token_client(env).transfer(&env.current_contract_address(), &campaign.creator, &amount);

    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"), campaign_id),
        FundsWithdrawn {
            campaign_id,
            creator: campaign.creator.clone(),
            amount,
        },
    );
}

/// Pays back every outstanding contributor of a failed campaign. Callable by
/// anyone; calling it again once all records are cleared is a no-op.
pub fn refund_all(env: &Env, campaign_id: u32) {
    let mut campaign = load_campaign(env, campaign_id);
    if campaign.state(env) != CampaignState::Failed {
        panic_with_error!(env, CampaignError::RefundNotAvailable);
    }

    let backers = load_backers(env, campaign_id);
    let token = token_client(env);

    for backer in backers.iter() {
        let contribution_key = DataKey::Contribution(campaign_id, backer.clone());
        let owed: i128 = env
            .storage()
            .instance()
            .get(&contribution_key)
            .unwrap_or(0);
        if owed == 0 {
            continue;
        }

        // Clear the record and settle the balance before paying out.
        env.storage().instance().remove(&contribution_key);
        campaign.balance -= owed;
        save_campaign(env, &campaign);

        token.transfer(&env.current_contract_address(), &backer, &owed);

        env.events().publish(
            (Symbol::new(env, "refund_issued"), campaign_id),
            RefundIssued {
                campaign_id,
                backer: backer.clone(),
                amount: owed,
            },
        );
    }

    env.storage()
        .instance()
        .set(&DataKey::Backers(campaign_id), &Vec::<Address>::new(env));
}

pub fn get_campaign(env: &Env, campaign_id: u32) -> Campaign {
    load_campaign(env, campaign_id)
}

pub fn get_state(env: &Env, campaign_id: u32) -> CampaignState {
    load_campaign(env, campaign_id).state(env)
}

pub fn get_tiers(env: &Env, campaign_id: u32) -> Vec<Tier> {
    let campaign = load_campaign(env, campaign_id);
    load_tiers(env, campaign.id)
}

pub fn get_balance(env: &Env, campaign_id: u32) -> i128 {
    load_campaign(env, campaign_id).balance
}

pub fn get_contribution(env: &Env, campaign_id: u32, backer: Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Contribution(campaign_id, backer))
        .unwrap_or(0)
}

pub fn has_donated(env: &Env, campaign_id: u32, backer: Address) -> bool {
    get_contribution(env, campaign_id, backer) > 0
}

pub(crate) fn load_campaign(env: &Env, campaign_id: u32) -> Campaign {
    env.storage()
        .instance()
        .get(&DataKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, FactoryError::CampaignNotFound))
}

pub(crate) fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .instance()
        .set(&DataKey::Campaign(campaign.id), campaign);
}

fn load_tiers(env: &Env, campaign_id: u32) -> Vec<Tier> {
    env.storage()
        .instance()
        .get(&DataKey::Tiers(campaign_id))
        .unwrap_or_else(|| Vec::new(env))
}

fn save_tiers(env: &Env, campaign_id: u32, tiers: &Vec<Tier>) {
    env.storage()
        .instance()
        .set(&DataKey::Tiers(campaign_id), tiers);
}

fn load_backers(env: &Env, campaign_id: u32) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Backers(campaign_id))
        .unwrap_or_else(|| Vec::new(env))
}

fn tier_position(tiers: &Vec<Tier>, tier_id: u32) -> Option<u32> {
    for (index, tier) in tiers.iter().enumerate() {
        if tier.id == tier_id {
            return Some(index as u32);
        }
    }
    None
}

fn require_creator(env: &Env, campaign: &Campaign, caller: &Address) {
    caller.require_auth();
    if caller != &campaign.creator {
        panic_with_error!(env, CampaignError::Unauthorized);
    }
}

fn token_client(env: &Env) -> token::Client<'_> {
    let token_address: Address = env
        .storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, FactoryError::NotInitialized));
    token::Client::new(env, &token_address)
}
