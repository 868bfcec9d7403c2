//! Shared primitive types used across the projection engine.

/// A 1-based month index into the projection horizon.
pub type Month = u32;

/// A stable identifier for a marketing campaign, unique within a catalog.
pub type CampaignId = String;
