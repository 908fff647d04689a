//! Core business logic for Tipsplit.
//!
//! This crate contains pure calculation logic with ZERO I/O dependencies.
//! Every function is a synchronous, side-effect-free function of its inputs.
//!
//! # Modules
//!
//! - `split` - Tip, total, and fair group split with cash rounding

pub mod split;
