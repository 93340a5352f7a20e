//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// FORMATTING TESTS
// =============================================================================

#[test]
fn test_indent_unit_is_two_spaces() {
    assert_eq!(INDENT_UNIT, "  ");
}

#[test]
fn test_indent_grows_by_one_unit_per_level() {
    for depth in 0..5 {
        assert_eq!(indent(depth + 1).len(), indent(depth).len() + INDENT_UNIT.len());
    }
}

#[test]
fn test_indent_negative_depth_is_empty() {
    assert!(indent(-1).is_empty());
    assert!(indent(-7).is_empty());
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_bond_threshold_exceeds_diameter() {
    assert!(DEFAULT_BOND_THRESHOLD > DEFAULT_DIAMETER);
    assert!(DEFAULT_BOND_THRESHOLD - DEFAULT_DIAMETER <= BOND_EPSILON * 2.0);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stack_segment_larger_than_red_zone() {
    assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
}

#[test]
fn test_stipple_sample_limit_is_positive() {
    assert!(MAX_STIPPLE_SAMPLES > 0);
}

// =============================================================================
// SCENE TESTS
// =============================================================================

#[test]
fn test_default_trace_level_within_limit() {
    assert!(DEFAULT_MAX_TRACE_LEVEL >= 1);
    assert!(DEFAULT_MAX_TRACE_LEVEL <= MAX_TRACE_LEVEL_LIMIT);
}

#[test]
fn test_default_includes_provide_colours() {
    assert!(DEFAULT_INCLUDES.contains(&"colors.inc"));
}
