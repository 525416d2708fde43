// ABOUTME: Unit tests for the single-slot plan cache
// ABOUTME: Tests hit/miss behavior, slot replacement, and generation serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use workout_plan_server::errors::{AppError, AppResult};
use workout_plan_server::models::{Goal, PlanLine, PlanParameters, WorkoutPlan};
use workout_plan_server::plan::PlanCache;

/// Helper: parameter set for a weight-loss request
fn weight_loss_params(weeks: u32) -> PlanParameters {
    PlanParameters::new(weeks, Goal::WeightLoss, "Budapest", Some(5)).unwrap()
}

/// Helper: one-paragraph plan with the given text
fn plan_with_text(text: &str) -> WorkoutPlan {
    WorkoutPlan {
        lines: vec![PlanLine::Paragraph(text.to_owned())],
    }
}

#[tokio::test]
async fn test_identical_parameters_skip_recompute() -> AppResult<()> {
    let cache = PlanCache::new();
    let params = weight_loss_params(4);
    let calls = AtomicU32::new(0);

    let first = cache
        .get_or_compute(&params, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(plan_with_text("first"))
        })
        .await?;

    let second = cache
        .get_or_compute(&params, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(plan_with_text("second"))
        })
        .await?;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_changed_parameters_replace_the_slot() -> AppResult<()> {
    let cache = PlanCache::new();
    let four_weeks = weight_loss_params(4);
    let six_weeks = weight_loss_params(6);
    let calls = AtomicU32::new(0);

    for params in [&four_weeks, &six_weeks, &four_weeks] {
        cache
            .get_or_compute(params, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(plan_with_text("plan"))
            })
            .await?;
    }

    // Single slot: returning to the first parameter set recomputes
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn test_any_field_change_misses() -> AppResult<()> {
    let cache = PlanCache::new();
    let base = weight_loss_params(4);
    let other_weight = PlanParameters::new(4, Goal::WeightLoss, "Budapest", Some(6)).unwrap();
    let calls = AtomicU32::new(0);

    for params in [&base, &other_weight] {
        cache
            .get_or_compute(params, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(plan_with_text("plan"))
            })
            .await?;
    }

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_compute_keeps_previous_entry() -> AppResult<()> {
    let cache = PlanCache::new();
    let cached = weight_loss_params(4);
    let failing = weight_loss_params(8);
    let calls = AtomicU32::new(0);

    cache
        .get_or_compute(&cached, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(plan_with_text("kept"))
        })
        .await?;

    let error = cache
        .get_or_compute(&failing, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::external_service("test", "generation failed"))
        })
        .await
        .unwrap_err();
    assert!(error.message.contains("generation failed"));

    // The earlier entry survived the failed generation
    let kept = cache
        .get_or_compute(&cached, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(plan_with_text("recomputed"))
        })
        .await?;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(kept, plan_with_text("kept"));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_identical_requests_compute_once() -> AppResult<()> {
    let cache = Arc::new(PlanCache::new());
    let params = weight_loss_params(4);
    let calls = Arc::new(AtomicU32::new(0));

    let slow_calls = calls.clone();
    let fast_calls = calls.clone();

    let (slow, fast) = tokio::join!(
        cache.get_or_compute(&params, || async move {
            slow_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(plan_with_text("generated"))
        }),
        cache.get_or_compute(&params, || async move {
            fast_calls.fetch_add(1, Ordering::SeqCst);
            Ok(plan_with_text("duplicate"))
        }),
    );

    // The second request waited on the slot lock and saw the cached plan
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(slow?, plan_with_text("generated"));
    assert_eq!(fast?, plan_with_text("generated"));
    Ok(())
}
