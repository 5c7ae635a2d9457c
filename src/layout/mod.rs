//! Word cloud layout
//!
//! This module contains the placement side of the crate:
//! - Canvas bounds and approximate label boxes
//! - Salience tiers
//! - A grid index for collision lookups
//! - The randomized placement engine

/// Canvas bounds and bounding boxes
pub mod canvas;
/// Grid bucketing of committed boxes
pub mod grid;
/// Label placement with bounded retries
pub mod placement;
/// Relative weight to style mapping
pub mod tier;

pub use canvas::{BoundingBox, Canvas};
pub use placement::{ExhaustionPolicy, LayoutConfig, LayoutEngine, LayoutOutcome, PlacedLabel};
pub use tier::{Tier, TierLadder};
