//! Subscription-business growth projection engine.
//!
//! Turns a small set of business parameters (a growth scenario,
//! optional churn, a multi-tier pricing catalog, and time-boxed
//! marketing campaigns) into a month-indexed table of users, revenue,
//! and growth rates over a capped horizon.
//!
//! The engine is a single pure function: build an immutable
//! [`config::ProjectionConfig`], pass it to [`projection::project`],
//! and render the returned rows. There is no state between runs and no
//! I/O inside the computation, so identical configurations always
//! produce identical tables.

pub mod campaign;
pub mod config;
pub mod error;
pub mod growth;
pub mod projection;
pub mod subscription;
pub mod summary;
pub mod types;

pub use campaign::{CampaignCatalog, MarketingCampaign, OverlapAdvisory};
pub use config::ProjectionConfig;
pub use error::{ConfigError, ProjectionError, ProjectionResult, ValidationError};
pub use growth::GrowthScenario;
pub use projection::{project, ProjectionRow, TierBreakdown};
pub use subscription::{SubscriptionTier, TierCatalog, TierId};
pub use summary::ProjectionSummary;
