//! Command implementations
//!
//! Each file extends the `Repository` facade with one user-facing operation,
//! so the dispatch in `main` stays a thin mapping from parsed arguments to a
//! method call.

mod add;
mod branch;
mod checkout;
mod commit;
mod fetch;
mod find;
mod init;
mod log;
mod merge;
mod push;
mod remote;
mod reset;
mod rm;
mod status;
