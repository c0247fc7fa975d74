#![allow(dead_code)]

pub mod command;
pub mod file;

pub use command::{
    branch_head, gitlite_commit, head_commit_id, read_control_file, run_gitlite, sha1_hex,
};
pub use file::{write_file, FileSpec};
