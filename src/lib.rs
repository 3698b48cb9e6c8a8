//! Build Discord message embeds with a chainable API and post them to a
//! webhook.

pub mod config;
pub mod discord;
pub mod document;
pub mod embed;
pub mod errors;
pub mod timestamp;

pub use document::{Map, Value};
pub use embed::MessageEmbed;
pub use timestamp::Timestamp;
