use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ValidationError {
    GoalMustBeGreaterThanZero = 101,
    DurationMustBeGreaterThanZero = 102,
    NameCannotBeEmpty = 103,
    TierNameCannotBeEmpty = 104,
    TierAmountMustBeGreaterThanZero = 105,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    AlreadyInitialized = 201,
    NotInitialized = 202,
    CreationPaused = 203,
    Unauthorized = 204,
    CampaignNotFound = 205,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    Unauthorized = 301,
    InvalidTier = 302,
    IncorrectAmount = 303,
    CampaignNotActive = 304,
    NotSuccessful = 305,
    AlreadyWithdrawn = 306,
    RefundNotAvailable = 307,
    AmountOverflow = 308,
}
