// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Swipe**: Trigger threshold
//! - **Animation**: Release spring and fly-off tween
//! - **List**: Row geometry

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Displacement (logical px) a release must reach to trigger the row action.
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 90.0;

/// Smallest accepted trigger distance. A zero threshold would turn every
/// click into a deletion.
pub const MIN_TRIGGER_DISTANCE: f32 = 10.0;

/// Largest accepted trigger distance.
pub const MAX_TRIGGER_DISTANCE: f32 = 1_000.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Spring stiffness for the spring-back motion.
pub const DEFAULT_SPRING_STIFFNESS: f32 = 750.0;

/// Spring damping for the spring-back motion.
pub const DEFAULT_SPRING_DAMPING: f32 = 50.0;

/// Spring mass for the spring-back motion.
pub const DEFAULT_SPRING_MASS: f32 = 1.0;

/// Duration of the fly-off tween (milliseconds).
pub const DEFAULT_FLY_OFF_MS: u64 = 280;

/// Longest accepted fly-off duration (milliseconds).
pub const MAX_FLY_OFF_MS: u64 = 5_000;

/// Animation tick interval while any row is moving (milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// List Defaults
// ==========================================================================

/// Height of a list row (logical px).
pub const DEFAULT_ROW_HEIGHT: f32 = 60.0;

/// Minimum row height.
pub const MIN_ROW_HEIGHT: f32 = 24.0;

/// Maximum row height.
pub const MAX_ROW_HEIGHT: f32 = 240.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TRIGGER_DISTANCE > 0.0);
    assert!(DEFAULT_TRIGGER_DISTANCE >= MIN_TRIGGER_DISTANCE);
    assert!(DEFAULT_TRIGGER_DISTANCE <= MAX_TRIGGER_DISTANCE);
    assert!(DEFAULT_SPRING_MASS > 0.0);
    assert!(DEFAULT_FLY_OFF_MS <= MAX_FLY_OFF_MS);
    assert!(DEFAULT_ROW_HEIGHT >= MIN_ROW_HEIGHT);
    assert!(DEFAULT_ROW_HEIGHT <= MAX_ROW_HEIGHT);
};
