/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults and thresholds used by the engine.
 */

// =============================================================================
// PROCESS DEFAULTS
// =============================================================================

/// Priority assigned when none (or a non-numeric / sub-minimum one) is given
pub const DEFAULT_PRIORITY: u32 = 1;

/// Most urgent priority value; lower values are normalized to the default
pub const MIN_PRIORITY: u32 = 1;

/// First id handed out by a fresh pid sequence
pub const FIRST_PID: u32 = 1;

// =============================================================================
// REPORTING
// =============================================================================

/// Decimal digits kept when metrics are rounded for display
pub const METRIC_PRECISION: i32 = 2;
