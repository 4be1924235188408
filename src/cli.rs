//! CLI infrastructure for the ultimate-ttt driver
//!
//! This module provides the command-line interface for playing against
//! the engine's agents and comparing agents head-to-head. It consumes
//! only the board's public contract.

pub mod commands;
pub mod output;
