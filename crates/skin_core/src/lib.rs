//! Core library for the skin pattern generator.
//!
//! This crate provides:
//! - The activator–inhibitor cellular automaton (`automaton`)
//! - Seeded randomness for reproducible runs
//! - PGM export of finished patterns

pub mod automaton;

pub use automaton::{
    export, Cell, ExportError, GridError, RunSummary, SimParams, Simulation, SkinGrid, StopReason,
    GRID_SIZE,
};
