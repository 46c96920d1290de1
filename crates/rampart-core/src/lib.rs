//! Core types and definitions for the RAMPART tower-defense simulation.
//!
//! This crate defines the vocabulary shared between the engine and any
//! presentation layer: components, commands, static level and type data,
//! state snapshots, events, errors, and constants.
//! It has no dependency on an ECS runtime, a renderer, or storage.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
