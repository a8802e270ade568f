//! Builds the HTML-mode Telegram report for a submission.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::escape::escape_html;
use crate::core::models::{Submission, TaskTyping};

/// Characters of each answer shown in the report.
pub const ANSWER_PREVIEW_CHARS: usize = 200;

/// Warning cap enforced by the proctoring client.
pub const MAX_WARNINGS: u64 = 2;

/// Formats a submission into the report text sent to Telegram.
///
/// Pure: no I/O, and free-text fields are HTML-escaped.
#[must_use]
pub fn format_submission_message(s: &Submission) -> String {
    let v = &s.violations;
    let d = &v.detailed;
    let mut out = String::with_capacity(1024);

    out.push_str("<b>📝 IELTS WRITING TEST SUBMISSION</b>\n\n");
    out.push_str(&format!(
        "<b>👤 Student:</b> {}\n",
        escape_html(&s.student_name)
    ));
    out.push_str(&format!("<b>⏰ Duration:</b> {}\n", escape_html(&s.duration)));
    out.push_str(&format!(
        "<b>📊 Submission Type:</b> {}\n",
        escape_html(&s.submission_type)
    ));
    out.push_str(&format!(
        "<b>🕒 Timestamp:</b> {}\n\n",
        format_timestamp(&s.timestamp)
    ));

    out.push_str("<b>🚨 VIOLATION REPORT</b>\n");
    out.push_str(&format!(
        "<b>• Total Violations:</b> {}\n",
        v.total_violations
    ));
    out.push_str(&format!(
        "<b>• Final Warning Count:</b> {}/{MAX_WARNINGS}\n\n",
        v.warning_count
    ));

    out.push_str("<b>📋 Violation Details:</b>\n");
    out.push_str(&format!("<code>• Tab Switching:</code> {}\n", d.tab_switching));
    out.push_str(&format!("<code>• App Switching:</code> {}\n", d.app_switching));
    out.push_str(&format!(
        "<code>• High Typing Speed:</code> {}\n",
        d.high_typing_speed
    ));
    out.push_str(&format!("<code>• Paste Detected:</code> {}\n", d.paste_detected));
    out.push_str(&format!(
        "<code>• Rapid Keystrokes:</code> {}\n\n",
        d.rapid_keystrokes
    ));

    out.push_str("<b>⌨️ Typing Analysis:</b>\n");
    out.push_str(&typing_line("Task 1", &v.typing_data.task1));
    out.push_str(&typing_line("Task 2", &v.typing_data.task2));
    out.push('\n');

    out.push_str("<b>📖 Word Counts:</b>\n");
    out.push_str(&format!("<code>• Task 1:</code> {}\n", s.task1.word_count));
    out.push_str(&format!("<code>• Task 2:</code> {}\n\n", s.task2.word_count));

    out.push_str("<b>📄 Task 1 Answer Preview:</b>\n");
    out.push_str(&format!(
        "<code>{}</code>\n\n",
        answer_preview(&s.task1.answer)
    ));

    out.push_str("<b>📄 Task 2 Answer Preview:</b>\n");
    out.push_str(&format!("<code>{}</code>", answer_preview(&s.task2.answer)));

    out
}

fn typing_line(label: &str, typing: &TaskTyping) -> String {
    format!(
        "<code>• {label}:</code> {} WPM, Violations: {}, Pastes: {}\n",
        typing.max_speed, typing.speed_violations, typing.paste_events
    )
}

/// Escaped preview of an answer: the first [`ANSWER_PREVIEW_CHARS`]
/// characters, followed by `...` when the answer was longer.
#[must_use]
pub fn answer_preview(answer: &str) -> String {
    match answer.char_indices().nth(ANSWER_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", escape_html(&answer[..cut])),
        None => escape_html(answer).into_owned(),
    }
}

/// Offset-less forms, taken as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Renders an ISO-8601 timestamp in UTC, en-US style.
///
/// Accepts RFC 3339, offset-less date-times down to minute precision, and
/// bare dates (midnight UTC). Anything else renders as `Invalid Date`
/// rather than failing the report.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw.trim()) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
