#![allow(dead_code)]

use crate::areas::repository::Repository;
use crate::errors::Result;
use clap::{Parser, Subcommand};

mod areas;
mod artifacts;
mod commands;
mod errors;

#[derive(Parser)]
#[command(
    name = "gitlite",
    version = "0.1.0",
    about = "A miniature filesystem-backed version-control system",
    long_about = "Gitlite tracks the history of a working directory as a \
    content-addressed object store with named branch pointers, a staging \
    area, and local-filesystem remotes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(name = "commit", about = "Create a new commit from the staged changes")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or mark a tracked file for removal")]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(name = "log", about = "Show the first-parent history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of all commits with the given message")]
    Find {
        #[arg(index = 1, help = "The exact commit message to search for")]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged changes, and untracked files")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch to a branch, or restore a single file",
        long_about = "Switches the working tree to another branch, or, with \
        --file, restores a single file from the current commit or from the \
        commit named by the positional id."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to, or a commit id when --file is given")]
        target: Option<String>,
        #[arg(short, long, help = "Restore this file instead of switching branches")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to an arbitrary commit")]
    Reset {
        #[arg(index = 1, help = "The commit id (a unique prefix is enough)")]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        branch: String,
    },
    #[command(name = "add-remote", about = "Register a remote repository path under a name")]
    AddRemote {
        #[arg(index = 1, help = "The remote name")]
        name: String,
        #[arg(index = 2, help = "The path to the remote repository")]
        path: String,
    },
    #[command(name = "rm-remote", about = "Forget a remote")]
    RmRemote {
        #[arg(index = 1, help = "The remote name")]
        name: String,
    },
    #[command(name = "push", about = "Append the current branch's commits to a remote branch")]
    Push {
        #[arg(index = 1, help = "The remote name")]
        remote: String,
        #[arg(index = 2, help = "The remote branch name")]
        branch: String,
    },
    #[command(name = "fetch", about = "Copy a remote branch's history into a tracking branch")]
    Fetch {
        #[arg(index = 1, help = "The remote name")]
        remote: String,
        #[arg(index = 2, help = "The remote branch name")]
        branch: String,
    },
    #[command(name = "pull", about = "Fetch a remote branch and merge it")]
    Pull {
        #[arg(index = 1, help = "The remote name")]
        remote: String,
        #[arg(index = 2, help = "The remote branch name")]
        branch: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(pwd, Box::new(std::io::stdout()))?;

    if let Err(error) = dispatch(&repository, &cli.command) {
        println!("{error}");
        std::process::exit(1);
    }

    Ok(())
}

fn dispatch(repository: &Repository, command: &Commands) -> Result<()> {
    if !matches!(command, Commands::Init) {
        repository.require_initialised()?;
    }

    match command {
        Commands::Init => repository.init(),
        Commands::Add { file } => repository.add(file),
        Commands::Commit { message } => repository.commit(message),
        Commands::Rm { file } => repository.rm(file),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (Some(branch), None) => repository.checkout_branch(branch),
            (None, Some(file)) => repository.checkout_file_from_head(file),
            (Some(commit), Some(file)) => repository.checkout_file_in_commit(commit, file),
            (None, None) => {
                println!("Incorrect operands.");
                std::process::exit(1);
            }
        },
        Commands::Branch { name } => repository.branch(name),
        Commands::RmBranch { name } => repository.rm_branch(name),
        Commands::Reset { commit } => repository.reset(commit),
        Commands::Merge { branch } => repository.merge(branch),
        Commands::AddRemote { name, path } => repository.add_remote(name, path),
        Commands::RmRemote { name } => repository.rm_remote(name),
        Commands::Push { remote, branch } => repository.push(remote, branch),
        Commands::Fetch { remote, branch } => repository.fetch(remote, branch),
        Commands::Pull { remote, branch } => repository.pull(remote, branch),
    }
}
