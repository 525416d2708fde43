// ABOUTME: Normalizes raw assistant text into presentation-tagged plan lines
// ABOUTME: Trims lines, drops blanks, and tags dash-prefixed lines as tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Raw assistant output to tagged plan lines.
//!
//! Splits on line breaks, trims each line, drops the blank ones, and tags
//! the rest: lines that start with a dash become task items, everything
//! else becomes a paragraph. Line order is preserved.

use crate::models::{PlanLine, WorkoutPlan};

/// Format raw assistant text into a workout plan
#[must_use]
pub fn format_plan(raw: &str) -> WorkoutPlan {
    let lines = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with('-') {
                PlanLine::Task(line.to_owned())
            } else {
                PlanLine::Paragraph(line.to_owned())
            }
        })
        .collect();

    WorkoutPlan { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_lines_become_tasks() {
        let plan = format_plan("Week 1\n- 20 push-ups\n- 30 squats");
        assert_eq!(
            plan.lines,
            vec![
                PlanLine::Paragraph("Week 1".into()),
                PlanLine::Task("- 20 push-ups".into()),
                PlanLine::Task("- 30 squats".into()),
            ]
        );
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_dropped() {
        let plan = format_plan("a\n\n \nb");
        assert_eq!(
            plan.lines,
            vec![
                PlanLine::Paragraph("a".into()),
                PlanLine::Paragraph("b".into()),
            ]
        );
    }

    #[test]
    fn test_lines_are_trimmed_before_tagging() {
        let plan = format_plan("   - rest day   ");
        assert_eq!(plan.lines, vec![PlanLine::Task("- rest day".into())]);
    }

    #[test]
    fn test_dash_after_indentation_still_tags_as_task() {
        let plan = format_plan("\t- morning run");
        assert_eq!(plan.lines, vec![PlanLine::Task("- morning run".into())]);
    }

    #[test]
    fn test_empty_input_yields_empty_plan() {
        assert!(format_plan("").lines.is_empty());
        assert!(format_plan("\n\n\n").lines.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let plan = format_plan("intro\n- a\nmiddle\n- b\noutro");
        let texts: Vec<&str> = plan.lines.iter().map(PlanLine::text).collect();
        assert_eq!(texts, vec!["intro", "- a", "middle", "- b", "outro"]);
    }

    #[test]
    fn test_formatting_already_normalized_text_is_stable() {
        let first = format_plan("Week 1\n- 20 push-ups\nRest well");
        let rejoined: Vec<&str> = first.lines.iter().map(PlanLine::text).collect();
        let second = format_plan(&rejoined.join("\n"));
        assert_eq!(first, second);
    }
}
