// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for carebridge-cli
// ABOUTME: Provides assessment, specialist and threshold commands

pub mod assess;
pub mod specialists;
pub mod thresholds;
