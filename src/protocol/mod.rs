//! Command protocol
//!
//! This module splits command lines into arguments, dispatches them to the
//! record and contact commands, and renders their replies.

pub mod command;
pub mod contact;
pub mod parser;
pub mod record;
pub mod reply;

pub use command::Command;
pub use parser::Parser;
pub use reply::Reply;

#[cfg(test)]
pub(crate) fn test_args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
