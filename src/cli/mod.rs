// src/cli/mod.rs
//
// Terminal front end: one-shot commands and the interactive browser

pub mod commands;
pub mod interactive;

pub use commands::{run, show, Cli, Commands, Invocation, Shown};
pub use interactive::{parse_input, Browser, Input, Outcome};
