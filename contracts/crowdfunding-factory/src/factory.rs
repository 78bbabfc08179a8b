use crate::campaign::save_campaign;
use crate::errors::{FactoryError, ValidationError};
use crate::events::{CampaignCreated, PauseToggled};
use crate::types::{Campaign, DataKey, SECONDS_PER_DAY};
use soroban_sdk::{panic_with_error, Address, Env, String, Symbol, Vec};

pub fn initialize(env: &Env, admin: Address, token: Address) {
    if env.storage().instance().has(&DataKey::Admin) {
        panic_with_error!(env, FactoryError::AlreadyInitialized);
    }

    env.storage().instance().set(&DataKey::Admin, &admin);
    env.storage().instance().set(&DataKey::Token, &token);
    env.storage().instance().set(&DataKey::Paused, &false);
    env.storage().instance().set(&DataKey::NextCampaignId, &1u32);
}

/// Registers a new campaign and returns its id.
pub fn create_campaign(
    env: &Env,
    creator: Address,
    name: String,
    description: String,
    goal: i128,
    duration_days: u64,
) -> u32 {
    creator.require_auth();

    if is_paused(env) {
        panic_with_error!(env, FactoryError::CreationPaused);
    }

    if name.is_empty() {
        panic_with_error!(env, ValidationError::NameCannotBeEmpty);
    }
    if goal <= 0 {
        panic_with_error!(env, ValidationError::GoalMustBeGreaterThanZero);
    }
    if duration_days == 0 {
        panic_with_error!(env, ValidationError::DurationMustBeGreaterThanZero);
    }

    let campaign_id = next_campaign_id(env);
    let deadline = env.ledger().timestamp() + duration_days * SECONDS_PER_DAY;

    let campaign = Campaign {
        id: campaign_id,
        creator: creator.clone(),
        name,
        description,
        goal,
        deadline,
        balance: 0,
        next_tier_id: 0,
        withdrawn: false,
    };
    save_campaign(env, &campaign);

    // Register in the creator bucket and the global list, in creation order.
    let mut creator_campaigns = get_user_campaigns(env, creator.clone());
    creator_campaigns.push_back(campaign_id);
    env.storage()
        .instance()
        .set(&DataKey::CreatorCampaigns(creator.clone()), &creator_campaigns);

    let mut all_campaigns = get_all_campaigns(env);
    all_campaigns.push_back(campaign_id);
    env.storage()
        .instance()
        .set(&DataKey::AllCampaigns, &all_campaigns);

    env.events().publish(
        (Symbol::new(env, "campaign_created"), creator.clone()),
        CampaignCreated {
            campaign_id,
            creator,
            goal,
            deadline,
        },
    );

    campaign_id
}

/// Flips the creation pause gate and returns the new value.
pub fn toggle_pause(env: &Env, caller: Address) -> bool {
    caller.require_auth();

    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, FactoryError::NotInitialized));

    if caller != admin {
        panic_with_error!(env, FactoryError::Unauthorized);
    }

    let paused = !is_paused(env);
    env.storage().instance().set(&DataKey::Paused, &paused);

    env.events().publish(
        (Symbol::new(env, "pause_toggled"),),
        PauseToggled { paused },
    );

    paused
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn get_user_campaigns(env: &Env, creator: Address) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::CreatorCampaigns(creator))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_all_campaigns(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::AllCampaigns)
        .unwrap_or_else(|| Vec::new(env))
}

fn next_campaign_id(env: &Env) -> u32 {
    let id: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or_else(|| panic_with_error!(env, FactoryError::NotInitialized));

    env.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &(id + 1));

    id
}
