//! Output Rendering
//!
//! Text for terminals and JSON values for `--json`. Renderers build
//! strings so the binary decides where they go.

use std::path::Path;

use crossterm::style::Stylize;

use super::diff::render_unified_diff;
use super::theme::{colors, Icons};
use crate::application::{CheckFinding, CheckReport, SplitOutcome};
use crate::domain::services::SplitPlan;
use crate::domain::value_objects::relative_to;

/// Context lines around each drifted hunk
const DIFF_CONTEXT: usize = 3;

/// Text renderer for split and check results
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode icons
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
        }
    }
}

impl TextRenderer {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    fn icons(&self) -> Icons {
        Icons::for_unicode(self.unicode)
    }

    fn paint(&self, text: &str, color: crossterm::style::Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// One line per produced artifact: `✓ console → dist-console`
    pub fn render_split(&self, outcome: &SplitOutcome, root: &Path) -> String {
        let icons = self.icons();
        outcome
            .artifacts
            .iter()
            .map(|artifact| {
                format!(
                    "{} {} {} {}\n",
                    self.paint(icons.success, colors::SUCCESS),
                    artifact.name,
                    icons.arrow,
                    relative_to(root, &artifact.target).display()
                )
            })
            .collect()
    }

    /// What a split would write, without writing it
    pub fn render_plan(&self, plan: &SplitPlan, root: &Path) -> String {
        let icons = self.icons();
        let mut out = format!(
            "Dry run: {} would be split into {} artifacts\n",
            relative_to(root, &plan.source).display(),
            plan.artifacts.len()
        );
        for artifact in &plan.artifacts {
            let spec = &artifact.spec;
            out.push_str(&format!(
                "{} {} {} {}\n",
                self.paint(icons.pending, colors::INFO),
                spec.name,
                icons.arrow,
                relative_to(root, &artifact.target).display()
            ));
            out.push_str(&format!("    type:    {}\n", spec.kind));
            out.push_str(&format!("    title:   {}\n", spec.title));
            out.push_str(&format!("    blocked: {}\n", spec.blocked_routes.join(", ")));
        }
        out
    }

    /// Per-artifact status, findings, and diffs for drifted entries
    pub fn render_check(&self, report: &CheckReport, root: &Path) -> String {
        let icons = self.icons();
        let mut out = String::new();

        for artifact in &report.artifacts {
            let target = relative_to(root, &artifact.target);
            if artifact.is_ok() {
                out.push_str(&format!(
                    "{} {} {}\n",
                    self.paint(icons.success, colors::SUCCESS),
                    artifact.name,
                    target.display()
                ));
                continue;
            }

            out.push_str(&format!(
                "{} {} {}\n",
                self.paint(icons.error, colors::ERROR),
                artifact.name,
                target.display()
            ));
            for finding in &artifact.findings {
                out.push_str(&format!("    {}\n", finding.message()));
                if let CheckFinding::ContentDrift {
                    entry,
                    expected,
                    actual,
                } = finding
                {
                    let entry = relative_to(root, entry);
                    let diff = render_unified_diff(
                        &entry.to_string_lossy().replace('\\', "/"),
                        expected,
                        actual,
                        DIFF_CONTEXT,
                        self.color,
                    );
                    for line in diff.lines() {
                        out.push_str(&format!("      {}\n", line));
                    }
                }
            }
        }

        if !report.compared_with_build {
            out.push_str(&format!(
                "{} build output not found; entry contents were not compared\n",
                self.paint(icons.warning, colors::WARNING)
            ));
        }

        let problems = report.finding_count();
        if problems == 0 {
            out.push_str("All artifacts are up to date\n");
        } else {
            out.push_str(&format!(
                "{} problem{} found\n",
                problems,
                if problems == 1 { "" } else { "s" }
            ));
        }
        out
    }
}

/// NDJSON lines for a check report: one per artifact, then a summary
pub fn check_report_json(report: &CheckReport, root: &Path) -> Vec<serde_json::Value> {
    let mut lines: Vec<serde_json::Value> = report
        .artifacts
        .iter()
        .map(|artifact| {
            let findings: Vec<_> = artifact
                .findings
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "kind": f.kind(),
                        "message": f.message(),
                    })
                })
                .collect();
            serde_json::json!({
                "event": "artifact_check",
                "command": "check",
                "name": artifact.name,
                "target": relative_to(root, &artifact.target).display().to_string(),
                "ok": artifact.is_ok(),
                "findings": findings,
            })
        })
        .collect();

    lines.push(serde_json::json!({
        "event": "complete",
        "command": "check",
        "status": if report.is_clean() { "success" } else { "failed" },
        "compared_with_build": report.compared_with_build,
        "findings": report.finding_count(),
    }));
    lines
}
