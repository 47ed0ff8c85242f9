// ABOUTME: Core types and constants for the CareBridge health risk service
// ABOUTME: Foundation crate with error handling, answer records, risk vocabulary and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CareBridge Core
//!
//! Foundation crate providing shared types and constants for the CareBridge
//! health risk service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Questionnaire answer records and risk vocabulary types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (answer records, conditions, risk levels, recommendations)
pub mod models;
