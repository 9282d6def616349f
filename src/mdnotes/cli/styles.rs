use console::Style;
use once_cell::sync::Lazy;

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static DIVIDER: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().cyan());
