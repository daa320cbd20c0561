use console::Style;
use once_cell::sync::Lazy;

pub static ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static PINNED: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static LANGUAGE: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static CATEGORY: Lazy<Style> = Lazy::new(|| Style::new().magenta());
pub static FAVORITE: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static DIM: Lazy<Style> = Lazy::new(|| Style::new().dim());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
