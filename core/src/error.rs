use crate::types::Month;
use thiserror::Error;

/// Entity-construction failures. Raised by the fallible constructors so
/// an invalid tier or campaign can never enter a catalog.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Tier name must not be empty")]
    EmptyTierName,

    #[error("Monthly price {0} is outside [0, 100]")]
    PriceOutOfRange(f64),

    #[error("Distribution percentage {0} is outside [0, 1]")]
    DistributionOutOfRange(f64),

    #[error("Duplicate tier: '{0}'")]
    DuplicateTier(String),

    #[error("Campaign id must not be empty")]
    EmptyCampaignId,

    #[error("Start month {0} is outside [1, 12]")]
    StartMonthOutOfRange(Month),

    #[error("Duration {0} is outside [1, 12] months")]
    DurationOutOfRange(Month),

    #[error("Campaign budget must be non-negative, got {0}")]
    NegativeBudget(f64),

    #[error("{stage} conversion rate {value} is outside [0, 1]")]
    ConversionRateOutOfRange { stage: &'static str, value: f64 },

    #[error("Duplicate campaign id: '{0}'")]
    DuplicateCampaign(String),
}

/// Run-start configuration failures. Fatal to the run: no partial table
/// is produced and the caller must repair the configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Projection horizon {requested} exceeds the maximum of {max} months")]
    HorizonTooLong { requested: Month, max: Month },

    #[error("At least one subscription tier must be configured")]
    NoTiers,

    #[error("Unrecognized growth scenario: '{0}'")]
    UnknownScenario(String),

    #[error("Scenario is Custom but no custom growth rate was supplied")]
    MissingCustomRate,

    #[error("Custom growth rate {0}% is outside [1, 200]")]
    CustomRateOutOfRange(f64),

    #[error("Churn rate {0} is outside [0, 0.15]")]
    ChurnRateOutOfRange(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum ProjectionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;
