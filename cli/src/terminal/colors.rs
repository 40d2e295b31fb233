use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const DOWNSTREAM: Color = Color::Cyan;
pub const UPSTREAM: Color = Color::Magenta;
pub const LATERAL: Color = Color::Blue;
pub const UNSET: Color = Color::Red;
