//! Itinerary synthesis for Roamwise.
//!
//! This crate provides [`ItinerarySynthesizer`], the default implementation
//! of the [`Planner`](roamwise_core::Planner) trait, and the total
//! [`synthesize`] function it wraps. Synthesis is rule-based and
//! deterministic: the pace fixes how many activities each day holds,
//! activities and must-eat dishes rotate through the destination's pools,
//! and city destinations end their days with nightlife.
//!
//! Destinations without activities or foods fall back to generic content
//! configured through [`PlannerConfig`].

#![forbid(unsafe_code)]

mod config;
mod synthesizer;

pub use config::{PlannerConfig, PlannerConfigError};
pub use synthesizer::{ItinerarySynthesizer, synthesize};
