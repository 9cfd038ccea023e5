//! Scenario tests for the moderation pipeline.
//!
//! The pipeline is exercised end to end against in-memory fakes: a scripted
//! completion backend standing in for the AI providers and a recording
//! gateway standing in for Discord.


mod action;
mod classifier;
mod cleanup;
mod router;
