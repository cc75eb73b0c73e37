// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use colored::Color;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Formats a number of minutes as `1h 40m`, `45m` or `2h`.
pub fn format_duration(minutes: i32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Renders a fraction in `0.0..=1.0` as a bar of `width` cells with a percentage.
pub fn progress_bar(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        progress * 100.0
    )
}

/// Parses a `#RRGGBB` color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Pads `s` with spaces up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize, left_aligned: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    match left_aligned {
        true => format!("{s}{fill}"),
        false => format!("{fill}{s}"),
    }
}
