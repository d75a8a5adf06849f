//! Markdown renderer module
//!
//! Renders draft listings, photo listings, and draft previews as Markdown
//! for terminal display. Timestamps are shown in the reference time zone.

use chrono::{FixedOffset, TimeZone, Utc};
use serde_json::Value;

use crate::models::{DraftPayload, DraftSummary, Photo};

/// A listed draft together with its fetched content
pub struct DraftView {
    pub summary: DraftSummary,
    /// `Null` when the content could not be fetched
    pub detail: Value,
}

/// Markdown renderer for listings
pub struct Renderer {
    zone: FixedOffset,
}

impl Renderer {
    pub fn new(zone: FixedOffset) -> Self {
        Self { zone }
    }

    /// Render the draft list with each draft's content
    pub fn render_drafts(&self, drafts: &[DraftView]) -> String {
        let mut output = String::new();

        if drafts.is_empty() {
            output.push_str("## Drafts\n\nNo drafts.");
            return output;
        }

        output.push_str(&format!("## Drafts ({})\n", drafts.len()));

        for (index, view) in drafts.iter().enumerate() {
            output.push('\n');
            output.push_str(&format!("### Draft {}", view.summary.draft_id));
            if index > 0 {
                output.push_str(" (ignored when updating)");
            }
            output.push_str("\n\n");

            if view.detail.is_null() {
                output.push_str("_Content unavailable._\n");
                continue;
            }
            if let Some(publish) = view.detail["publishScheduleDate"].as_i64() {
                output.push_str(&format!("**Publish:** {}\n\n", self.format_millis(publish)));
            }
            if let Some(text) = view.detail["textContent"].as_str() {
                output.push_str(&quote(text));
                output.push_str("\n\n");
            }
            output.push_str(&json_block(&view.detail));
            output.push('\n');
        }

        output.trim_end().to_string()
    }

    /// Render album photos, newest first
    pub fn render_photos(&self, photos: &[Photo]) -> String {
        let mut output = format!("## Photos ({})\n", photos.len());

        if !photos.is_empty() {
            output.push('\n');
        }
        for photo in photos {
            output.push_str(&format!("- {}\n", photo.url));
        }

        output.trim_end().to_string()
    }

    /// Render a draft payload before it is sent
    pub fn render_payload(&self, payload: &DraftPayload) -> String {
        let mut output = String::new();

        output.push_str("## Draft preview\n\n");
        output.push_str("| Entry | Time | Detail |\n");
        output.push_str("|-------|------|--------|\n");

        for sleep in &payload.sleep {
            output.push_str(&self.row("Sleep", sleep.sleep_time, ""));
            output.push_str(&self.row("Awake", sleep.awake_time, ""));
        }
        for health in &payload.health {
            let detail = format!("{} {}°C", health.health_status, health.temperature);
            output.push_str(&self.row("Health", health.health_time, &detail));
        }
        for food in &payload.food {
            output.push_str(&self.row("Food", food.food_time, &food.food_menu));
        }
        output.push_str(&self.row("Publish", payload.publish_schedule_date, ""));
        output.push_str(&self.row(
            "Pick-up",
            payload.pick_up_time,
            &payload.pick_up_person,
        ));

        output.push_str("\n### Message\n\n");
        output.push_str(&quote(&payload.text_content));
        output.push('\n');

        if !payload.photos.is_empty() {
            output.push_str("\n### Photos\n\n");
            for url in &payload.photos {
                output.push_str(&format!("- {}\n", url));
            }
        }

        output.trim_end().to_string()
    }

    fn row(&self, entry: &str, millis: i64, detail: &str) -> String {
        format!("| {} | {} | {} |\n", entry, self.format_millis(millis), detail)
    }

    fn format_millis(&self, millis: i64) -> String {
        match Utc.timestamp_millis_opt(millis).single() {
            Some(utc) => utc
                .with_timezone(&self.zone)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            None => millis.to_string(),
        }
    }
}

fn quote(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn json_block(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("```json\n{}\n```\n", pretty)
}
