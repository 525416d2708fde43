// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the axum request harness and the scripted assistant stub
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod assistant_stub;
pub mod axum_test;
