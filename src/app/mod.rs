// Presentation boundary: parses user commands and renders core output.

pub mod commands;
pub mod export;
pub mod session;
