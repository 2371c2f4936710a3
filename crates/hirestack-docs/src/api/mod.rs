//! HTTP handlers for the documentation shell.

mod health;
mod router;
mod shell;
mod spec;

#[cfg(test)]
mod tests;

pub use router::create_router;
