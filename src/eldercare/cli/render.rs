//! # Rendering
//!
//! Turns records, messages and config into terminal text. Every function
//! returns a `String`; callers decide where it goes (stdout for one-shot
//! commands, the shell's writer for the menu).
//!
//! Layout math for the table (column widths, truncation, padding) is
//! Unicode-aware so names with accents or wide characters stay aligned.

use colored::Colorize;
use eldercare::api::{CmdMessage, MessageLevel};
use eldercare::config::CareConfig;
use eldercare::error::CareError;
use eldercare::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const COLUMN_GAP: &str = "  ";
const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 22;
const AGE_WIDTH: usize = 4;
const CONTACT_WIDTH: usize = 14;
const ADDRESS_WIDTH: usize = 24;
const RECORD_SEPARATOR: &str = "------------------------------------";

/// Full multi-line view of one record.
pub fn render_record(record: &Record) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "ID:".bold(), record.id.to_string().yellow()));
    out.push_str(&format!("{} {}\n", "Name:".bold(), record.name));
    out.push_str(&format!("{} {}\n", "Age:".bold(), record.age));
    out.push_str(&format!("{} {}\n", "Address:".bold(), record.address));
    out.push_str(&format!("{} {}\n", "Need/Remarks:".bold(), record.need));
    out.push_str(&format!("{} {}\n", "Contact:".bold(), record.contact));
    out.push_str(RECORD_SEPARATOR);
    out.push('\n');
    out
}

pub fn render_records(records: &[Record]) -> String {
    records.iter().map(render_record).collect()
}

/// One line per record, fixed-width columns. Empty input renders nothing.
pub fn render_record_table(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let fixed = ID_WIDTH + NAME_WIDTH + AGE_WIDTH + CONTACT_WIDTH + ADDRESS_WIDTH;
    let need_width = LINE_WIDTH.saturating_sub(fixed + 5 * COLUMN_GAP.len());

    let mut out = String::new();
    let header = [
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Name", NAME_WIDTH),
        format!("{:>width$}", "Age", width = AGE_WIDTH),
        pad_to_width("Contact", CONTACT_WIDTH),
        pad_to_width("Address", ADDRESS_WIDTH),
        "Need".to_string(),
    ]
    .join(COLUMN_GAP);
    out.push_str(&format!("{}\n", header.trim_end().bold()));

    for r in records {
        let line = [
            pad_to_width(&r.id.to_string(), ID_WIDTH).yellow().to_string(),
            pad_to_width(&r.name, NAME_WIDTH),
            format!("{:>width$}", r.age, width = AGE_WIDTH),
            pad_to_width(&r.contact, CONTACT_WIDTH),
            pad_to_width(&r.address, ADDRESS_WIDTH),
            truncate_to_width(&r.need, need_width),
        ]
        .join(COLUMN_GAP);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let styled = match m.level {
                MessageLevel::Info => m.content.dimmed(),
                MessageLevel::Success => m.content.green(),
                MessageLevel::Warning => m.content.yellow(),
                MessageLevel::Error => m.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_error(err: &CareError) -> String {
    format!("{}\n", err.to_string().red())
}

pub fn render_config(config: &CareConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

/// Truncates to `max_width` columns, marking the cut with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}
