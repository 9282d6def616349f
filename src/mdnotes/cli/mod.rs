mod commands;
mod menu;
mod print;
mod setup;
mod styles;

pub use commands::run;
