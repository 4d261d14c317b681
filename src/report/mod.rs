//! Human-readable diagnostics for collection change failures.

use std::fmt::Debug;

use colored::Colorize;

use crate::change::ChangeDetails;
use crate::config::MatcherConfig;
use crate::diff::{ViolationCategory, ViolationReport};
use crate::snapshot::Snapshot;

pub const ORIGINAL_WAS: &str = "the original collection was:                      ";
pub const FINAL_WAS: &str = "the final collection was:                         ";

pub fn category_label(category: ViolationCategory) -> &'static str {
    match category {
        ViolationCategory::MissingInOriginal => "the original collection should have included:     ",
        ViolationCategory::ExtraInOriginal => "the original collection should not have included: ",
        ViolationCategory::MissingInFinal => "the final collection should have included:        ",
        ViolationCategory::ExtraInFinal => "the final collection should not have included:    ",
    }
}

pub struct Reporter<'c> {
    config: &'c MatcherConfig,
}

impl<'c> Reporter<'c> {
    pub fn new(config: &'c MatcherConfig) -> Self {
        Self { config }
    }

    /// Base failure text (if the base check failed), then one line per
    /// non-empty violation category and the snapshot dumps. `report` is
    /// `None` when no collection rules were declared.
    pub fn render<V: Snapshot>(
        &self,
        base_failure: Option<&str>,
        report: Option<&ViolationReport<V::Item>>,
        details: Option<&ChangeDetails<V>>,
    ) -> String {
        let mut message = base_failure.unwrap_or_default().to_string();

        let Some(report) = report else {
            return message;
        };

        let mut lines = Vec::new();
        for category in ViolationCategory::ALL {
            let values = match category {
                ViolationCategory::MissingInOriginal if !report.missing_in_original.is_empty() => {
                    self.format_value(&report.missing_in_original)
                }
                ViolationCategory::ExtraInOriginal if !report.extra_in_original.is_empty() => {
                    self.format_value(&report.extra_in_original)
                }
                ViolationCategory::MissingInFinal if !report.missing_in_final.is_empty() => {
                    self.format_value(&report.missing_in_final)
                }
                ViolationCategory::ExtraInFinal if !report.extra_in_final.is_empty() => {
                    self.format_value(&report.extra_in_final)
                }
                _ => continue,
            };
            lines.push(self.violation_line(category_label(category), &values));
        }

        if let Some(details) = details.filter(|_| self.config.dump_snapshots) {
            if let Some(line) = self.snapshot_line(ORIGINAL_WAS, &details.actual_before) {
                lines.push(line);
            }
            if let Some(line) = self.snapshot_line(FINAL_WAS, &details.actual_after) {
                lines.push(line);
            }
        }

        if !lines.is_empty() {
            message.push('\n');
            message.push_str(&lines.join("\n"));
            message.push('\n');
        }

        message
    }

    fn format_value<T: Debug + ?Sized>(&self, value: &T) -> String {
        if self.config.pretty {
            format!("{:#?}", value)
        } else {
            format!("{:?}", value)
        }
    }

    fn violation_line(&self, label: &str, values: &str) -> String {
        let line = format!("{}{}", label, values);
        if self.config.colored {
            line.red().to_string()
        } else {
            line
        }
    }

    /// Empty collections are skipped like empty violation categories.
    fn snapshot_line<V: Snapshot>(&self, label: &str, snapshot: &V) -> Option<String> {
        if snapshot.is_empty_collection() {
            return None;
        }
        let line = format!("{}{}", label, self.format_value(snapshot));
        Some(if self.config.colored {
            line.dimmed().to_string()
        } else {
            line
        })
    }
}
