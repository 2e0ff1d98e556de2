mod app;
mod components;
mod form;
mod help;
pub mod theme;
mod widgets;

pub use app::render;
