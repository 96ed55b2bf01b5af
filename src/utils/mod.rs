// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Currently holds the shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

/// HTTP client configuration and helpers
pub mod http_client;
