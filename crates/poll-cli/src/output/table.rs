use poll_core::Poll;

/// Widest a cell may grow before it is truncated.
pub const MAX_CELL_WIDTH: usize = 40;

const POLL_HEADERS: [&str; 6] = ["id", "title", "expiration", "options", "voters", "description"];

/// Render polls as rows with a fixed column order.
#[must_use]
pub fn render_polls(polls: &[Poll]) -> String {
    if polls.is_empty() {
        return String::from("(no polls)");
    }
    let rows = polls.iter().map(poll_row).collect::<Vec<_>>();
    render_table(&POLL_HEADERS, &rows)
}

fn poll_row(poll: &Poll) -> Vec<String> {
    let or_dash = |value: String| {
        if value.is_empty() {
            String::from("-")
        } else {
            value
        }
    };
    vec![
        poll.id.map_or_else(|| String::from("-"), |id| id.to_string()),
        or_dash(poll.title.clone()),
        poll.expiration
            .map_or_else(|| String::from("-"), |date| date.to_string()),
        or_dash(poll.options.clone()),
        or_dash(poll.voters.clone()),
        or_dash(poll.description.clone().unwrap_or_default()),
    ]
}

/// Render a left-aligned table; numeric cells are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .min(MAX_CELL_WIDTH)
        })
        .collect::<Vec<_>>();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider.trim_end().to_string());
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                pad(&text, *width, looks_numeric(&text))
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    value != "-" && !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit() || ch == '-')
}
