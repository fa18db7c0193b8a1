//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Bookstock · command (context)"
/// Plain mode: "bookstock command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if ctx.mode.is_json() {
        return String::new();
    }
    if !ctx.mode.is_pretty() {
        return format!("bookstock {}", command);
    }
    let title = styled("Bookstock", styles::bold(), ctx.color);
    match context {
        Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
        None => format!("{} \u{00B7} {}", title, command),
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    /// A right-aligned column for counts and prices.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Render a table using comfy-table.
///
/// Pretty mode: rounded unicode borders. Plain mode: markdown-style ASCII
/// table with a header row, so output stays stable when piped.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut table = ComfyTable::new();

    if ctx.mode.is_pretty() && ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }

    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    table.set_header(headers);

    for row in rows {
        table.add_row(row);
    }

    for (i, col) in columns.iter().enumerate() {
        if col.numeric {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
