// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for carebridge-cli
// ABOUTME: JSON input reading and pretty output

pub mod io;
