use colored::{Color, Colorize};
use console::measure_text_width;

const PADDING: usize = 2;

/// Rounded box around `lines`, one blank row of padding top and bottom.
/// Lines may carry ANSI styling and wide characters; rows are aligned on
/// their display width.
pub fn render(lines: &[String], border: Color) -> String {
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0)
        + PADDING * 2;

    let horizontal = "─".repeat(width);
    let edge = "│".color(border).dimmed().to_string();
    let pad = " ".repeat(PADDING);

    let mut out = Vec::with_capacity(lines.len() + 4);
    out.push(format!("╭{horizontal}╮").color(border).dimmed().to_string());
    out.push(format!("{edge}{}{edge}", " ".repeat(width)));

    for line in lines {
        let fill = width - PADDING * 2 - measure_text_width(line);
        out.push(format!("{edge}{pad}{line}{}{pad}{edge}", " ".repeat(fill)));
    }

    out.push(format!("{edge}{}{edge}", " ".repeat(width)));
    out.push(format!("╰{horizontal}╯").color(border).dimmed().to_string());

    out.join("\n")
}
