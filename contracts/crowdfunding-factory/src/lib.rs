#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod campaign;
mod errors;
mod events;
mod factory;
mod types;


pub use errors::*;
pub use events::*;
pub use types::*;

#[contract]
pub struct CrowdfundingFactory;

#[contractimpl]
impl CrowdfundingFactory {
    /// Initialize the factory with its admin and the contribution token.
    pub fn initialize(env: Env, admin: Address, token: Address) {
        factory::initialize(&env, admin, token)
    }

    // Factory functions
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        goal: i128,
        duration_days: u64,
    ) -> u32 {
        factory::create_campaign(&env, creator, name, description, goal, duration_days)
    }

    pub fn toggle_pause(env: Env, caller: Address) -> bool {
        factory::toggle_pause(&env, caller)
    }

    pub fn is_paused(env: Env) -> bool {
        factory::is_paused(&env)
    }

    pub fn get_user_campaigns(env: Env, creator: Address) -> Vec<u32> {
        factory::get_user_campaigns(&env, creator)
    }

    pub fn get_all_campaigns(env: Env) -> Vec<u32> {
        factory::get_all_campaigns(&env)
    }

    // Campaign functions
    pub fn add_tier(env: Env, caller: Address, campaign_id: u32, name: String, amount: i128) -> u32 {
        campaign::add_tier(&env, caller, campaign_id, name, amount)
    }

    pub fn remove_tier(env: Env, caller: Address, campaign_id: u32, tier_id: u32) {
        campaign::remove_tier(&env, caller, campaign_id, tier_id)
    }

    pub fn fund(env: Env, contributor: Address, campaign_id: u32, tier_id: u32, amount: i128) {
        campaign::fund(&env, contributor, campaign_id, tier_id, amount)
    }

    pub fn withdraw(env: Env, caller: Address, campaign_id: u32) {
        campaign::withdraw(&env, caller, campaign_id)
    }

    pub fn refund_all(env: Env, campaign_id: u32) {
        campaign::refund_all(&env, campaign_id)
    }

    // Query functions
    pub fn get_campaign(env: Env, campaign_id: u32) -> Campaign {
        campaign::get_campaign(&env, campaign_id)
    }

    pub fn get_state(env: Env, campaign_id: u32) -> CampaignState {
        campaign::get_state(&env, campaign_id)
    }

    pub fn get_tiers(env: Env, campaign_id: u32) -> Vec<Tier> {
        campaign::get_tiers(&env, campaign_id)
    }

    pub fn get_balance(env: Env, campaign_id: u32) -> i128 {
        campaign::get_balance(&env, campaign_id)
    }

    pub fn get_contribution(env: Env, campaign_id: u32, backer: Address) -> i128 {
        campaign::get_contribution(&env, campaign_id, backer)
    }

    pub fn has_donated(env: Env, campaign_id: u32, backer: Address) -> bool {
        campaign::has_donated(&env, campaign_id, backer)
    }
}
