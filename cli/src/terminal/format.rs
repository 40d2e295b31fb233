use colored::*;
use topograph_core::model::link::Direction;

use crate::terminal::colors;

pub fn direction(direction: Option<Direction>) -> ColoredString {
    match direction {
        Some(Direction::Downstream) => "downstream".color(colors::DOWNSTREAM),
        Some(Direction::Upstream) => "upstream".color(colors::UPSTREAM),
        Some(Direction::Lateral) => "lateral".color(colors::LATERAL),
        None => "unclassified".color(colors::UNSET),
    }
}

pub fn level(level: Option<i64>) -> ColoredString {
    match level {
        Some(level) => level.to_string().color(colors::ACCENT),
        None => "unset".color(colors::UNSET),
    }
}

pub fn level_diff(diff: Option<i64>) -> ColoredString {
    match diff {
        Some(diff) => format!("{diff:+}").color(colors::TEXT_DEFAULT),
        None => "n/a".color(colors::UNSET),
    }
}

pub fn plural(count: usize, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
