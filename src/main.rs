//! snapvc CLI - snapshot-based local version control

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use std::io::{self, Write};

use snapvc::ops::{
    commit, diff, history, latest, resolve, resolve_version, restore, stage_dir, status,
};
use snapvc::{DiffReport, Repo, Version, WorkTree};

#[derive(Parser)]
#[command(name = "snapvc")]
#[command(about = "minimal local version control - content-addressed snapshots")]
#[command(version)]
struct Cli {
    /// repository path
    #[arg(short, long, default_value = ".snapvc")]
    repo: PathBuf,

    /// working tree path
    #[arg(short, long, default_value = ".")]
    workdir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// initialize a new repository
    Init,

    /// stage files or directories for the next snapshot
    Add {
        /// working-tree paths to stage
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// list staged files
    Status,

    /// record the staging index as a new snapshot
    Commit {
        /// snapshot message
        #[arg(short, long)]
        message: String,
    },

    /// show snapshot history, newest first
    History {
        /// maximum number of snapshots to show
        #[arg(short = 'n', long)]
        max_count: Option<usize>,
    },

    /// compare one file between two versions
    Diff {
        /// file path within the working tree
        file: String,

        /// old version: worktree, staged, latest, or a snapshot id
        #[arg(default_value = "worktree")]
        from: String,

        /// new version
        #[arg(default_value = "staged")]
        to: String,
    },

    /// print file content at a version
    Show {
        /// file path within the working tree
        file: String,

        /// version to read
        #[arg(default_value = "latest")]
        version: String,
    },

    /// write file content from a version back into the working tree
    Restore {
        /// file path within the working tree
        file: String,

        /// version to restore from
        #[arg(long, default_value = "latest")]
        from: String,
    },

    /// print the id of the most recent snapshot
    Latest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> snapvc::Result<()> {
    match cli.command {
        Commands::Init => {
            Repo::init(&cli.repo)?;
            println!("initialized snapvc repository at {}", cli.repo.display());
        }

        Commands::Add { paths } => {
            let repo = Repo::open(&cli.repo)?;
            let worktree = WorkTree::new(&cli.workdir);

            for path in paths {
                for (staged, hash) in stage_dir(&repo, &worktree, &path)? {
                    println!("staged {} {}", hash, staged);
                }
            }
        }

        Commands::Status => {
            let repo = Repo::open(&cli.repo)?;
            let staged = status(&repo)?;

            if staged.is_empty() {
                println!("nothing staged");
            } else {
                for (path, hash) in &staged {
                    println!("{} {}", hash, path);
                }
            }
        }

        Commands::Commit { message } => {
            let repo = Repo::open(&cli.repo)?;
            let hash = commit(&repo, &message)?;
            println!("{}", hash);
        }

        Commands::History { max_count } => {
            let repo = Repo::open(&cli.repo)?;
            let entries = history(&repo)?;
            let shown = max_count.unwrap_or(entries.len());

            for entry in entries.into_iter().take(shown) {
                println!("{}", entry);
            }
        }

        Commands::Diff { file, from, to } => {
            let repo = Repo::open(&cli.repo)?;
            let worktree = WorkTree::new(&cli.workdir);

            let from = resolve_version(&repo, &from)?;
            let to = resolve_version(&repo, &to)?;
            let report = diff(&repo, &worktree, &file, &from, &to)?;
            print_diff(&file, &from, &to, &report);
        }

        Commands::Show { file, version } => {
            let repo = Repo::open(&cli.repo)?;
            let worktree = WorkTree::new(&cli.workdir);

            let version = resolve_version(&repo, &version)?;
            let content = match resolve(&repo, &worktree, &file, &version)? {
                Some(content) => content,
                None => return Err(snapvc::Error::PathNotFound(file)),
            };
            io::stdout()
                .write_all(&content)
                .map_err(|e| snapvc::Error::Io { path: "stdout".into(), source: e })?;
        }

        Commands::Restore { file, from } => {
            let repo = Repo::open(&cli.repo)?;
            let worktree = WorkTree::new(&cli.workdir);

            let version = resolve_version(&repo, &from)?;
            restore(&repo, &worktree, &file, &version)?;
            println!("restored {} from {}", file, version);
        }

        Commands::Latest => {
            let repo = Repo::open(&cli.repo)?;

            match latest(&repo)? {
                Some(hash) => println!("{}", hash),
                None => println!("no snapshots"),
            }
        }
    }

    Ok(())
}

fn print_diff(file: &str, from: &Version, to: &Version, report: &DiffReport) {
    match report {
        DiffReport::NotFound => {
            println!("File '{}' not found in both versions", file);
        }

        DiffReport::Added { content } => {
            println!("File '{}' was added in {}", file, to);
            println!("+ Content: {}", String::from_utf8_lossy(content));
        }

        DiffReport::Deleted { content } => {
            println!("File '{}' was deleted from {}", file, from);
            println!("- Content: {}", String::from_utf8_lossy(content));
        }

        DiffReport::Unchanged => {
            println!("No changes in '{}' between {} and {}", file, from, to);
        }

        DiffReport::Modified { lines } => {
            println!("Changes in '{}' from {} to {}:", file, from, to);
            println!("{}", "=".repeat(50));

            for line in lines {
                println!("{}", line);
            }
        }
    }
}
