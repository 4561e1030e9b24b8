use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Banner line above a table view, e.g. `━━━ CLIENTS ━━━`
pub fn rule(title: &str) {
    println!("━━━ {} ━━━", title.style(theme().banner.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().label.clone()),
        label.style(theme().label.clone()),
        value
    );
}

/// Command help line shown under a rendered table
pub fn hint(text: &str) {
    println!("{}", text.style(theme().hint.clone()));
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}
