//! CLI domain: parse, route, and output only.
//! No merge logic; the route hands off to the engine and formats the result.

mod output;
mod parse;
mod route;

pub use output::{format_summary_json, format_summary_text, map_error};
pub use parse::Cli;
pub use route::RunContext;
