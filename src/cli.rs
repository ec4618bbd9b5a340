use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tasktrail_application::prelude as flows;
use tasktrail_core::{
    repositories::ActivityRepo as _,
    usecases::{ActivityQuery, NewActivity},
};
use tasktrail_db_sqlite::Connections;

use crate::{cfg::Cfg, gateways::LogNotifyGw};

#[derive(Debug, Parser)]
#[command(name = "tasktrail", about = "Activity trail for project boards", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the rendered activity feed of a board, newest first
    Feed {
        /// Public id of the board
        #[arg(long)]
        board: String,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Record a comment activity, e.g. to smoke-test a deployment
    Comment {
        #[arg(long)]
        board: String,
        #[arg(long)]
        task: String,
        /// Public id of the commenting user
        #[arg(long)]
        user: String,
        text: String,
    },
    /// Drop the recorded trail of a board or task (data retention)
    Purge {
        #[arg(long, conflicts_with = "task")]
        board: Option<String>,
        #[arg(long)]
        task: Option<String>,
    },
    /// Print activity statistics
    Stats,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Cfg::load(args.config.as_deref())?;
    let connections = Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    tasktrail_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command {
        Command::Feed { board, limit } => {
            let query = ActivityQuery {
                board_id: Some(board.as_str().into()),
                limit,
                ..Default::default()
            };
            for entry in flows::activity_feed(&connections, query)? {
                println!("{}  {}", entry.event.at, entry.message);
            }
        }
        Command::Comment {
            board,
            task,
            user,
            text,
        } => {
            let new = NewActivity {
                by: user.as_str().into(),
                board_id: board.as_str().into(),
                payload: tasktrail_core::entities::ActivityPayload::CommentAdded {
                    task_id: task.as_str().into(),
                    content: text,
                },
            };
            match flows::record_activity_best_effort(&connections, &LogNotifyGw, new) {
                Some(event) => println!("Recorded activity {}", event.id),
                None => println!("Activity not recorded (see the log for details)"),
            }
        }
        Command::Purge { board, task } => {
            let purged = if let Some(task) = task {
                flows::purge_activities_of_task(&connections, &task)?
            } else if let Some(board) = board {
                flows::purge_activities_of_board(&connections, &board)?
            } else {
                anyhow::bail!("Either --board or --task is required");
            };
            println!("Purged {purged} activities");
        }
        Command::Stats => {
            let connection = connections.shared()?;
            println!("Recorded activities: {}", connection.count_activities()?);
        }
    }
    Ok(())
}
