use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::actions;
use crate::db::{Store, path};

#[derive(Parser, Debug)]
#[command(name = "done")]
#[command(version = "0.1")]
#[command(about = "Simple DONE tracking tool", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Words of a new entry; with none given, recent entries are listed
    words: Vec<String>,

    /// List every entry instead of only the last week
    #[arg(short, long)]
    all: bool,

    /// Remove the entry with this id
    #[arg(long, value_name = "ID", conflicts_with = "words")]
    delete: Option<i64>,

    /// Store location, defaults to ~/.done.sqlite
    #[arg(long, env = "DONE_DB")]
    db: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let db_path = path::resolve_store_path(cli.db)?;
    let store = Store::initialize(&db_path)?;
    let mut out = io::stdout().lock();

    if let Some(id) = cli.delete {
        return actions::delete::delete(&store, &mut out, id);
    }

    if !cli.words.is_empty() {
        return actions::add::add(&store, &mut out, &cli.words);
    }

    actions::list::list(&store, &mut out, cli.all, Utc::now().timestamp())
}
