// ABOUTME: Common benchmark utilities shared by Criterion benchmarks
// ABOUTME: Re-exports deterministic activity generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

pub mod fixtures;
