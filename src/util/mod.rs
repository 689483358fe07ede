//! Shared utilities for the layout engine.

pub mod easing;
