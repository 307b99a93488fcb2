mod console;
mod entities;
mod summary;

pub use console::*;
pub use entities::*;
pub use summary::*;

use chrono::TimeDelta;
use comfy_table::Table;

/// Table with the shared header styling
pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_header(headers.to_vec());
    table
}

/// Renders a seconds count as `Nd HH:MM:SS`, or the input unchanged when it
/// is not a whole number of seconds.
pub fn format_seconds(raw: &str) -> String {
    let Some(delta) = raw
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(TimeDelta::try_seconds)
    else {
        return raw.to_string();
    };

    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let delta = delta.abs();
    let days = delta.num_days();
    let hours = delta.num_hours() % 24;
    let minutes = delta.num_minutes() % 60;
    let seconds = delta.num_seconds() % 60;

    if days > 0 {
        format!("{sign}{days}d {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}
