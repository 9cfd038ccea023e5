//! LuvoBot Test Utils
//!
//! Provides shared testing utilities for building unit tests for the luvobot
//! application. This crate offers factory functions that create valid Serenity
//! structs by deserializing JSON, simulating what Discord's API would return.
//!
//! # Overview
//!
//! The test utilities consist of one main component:
//! - **serenity factories**: Functions for creating mock Serenity objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[test]
//! fn test_message_handling() {
//!     let author = create_test_user(111, "sender", false);
//!     let message = create_test_message(222, 333, &author, "hello world");
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
