//! Prompt domain: the form's field set and the rule that compiles it into text
//!
//! Nothing in here knows about the terminal or the network. The app layer
//! owns a [`FieldSet`], mutates it from key events, and calls [`compile`].

mod compile;
mod fields;
mod temperature;
mod tone;

pub use compile::{ValidationError, compile};
pub use fields::{FieldId, FieldSet};
pub use temperature::Temperature;
pub use tone::Tone;
