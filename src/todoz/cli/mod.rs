//! CLI wiring: store resolution, engine construction, command dispatch.
//!
//! The CLI is just another event source for the engine. It consumes the
//! engine's render boundary through a shared snapshot and prints the last
//! emitted view once the command has run.

mod render;

use crate::args::{Cli, Commands};
use clap::Parser;
use render::Snapshot;
use std::cell::RefCell;
use std::rc::Rc;
use todoz::config;
use todoz::engine::TaskListEngine;
use todoz::error::{Result, TodozError};
use todoz::ids::UuidSource;
use todoz::model::Task;
use todoz::store::fs::JsonFileStore;
use uuid::Uuid;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.data_dir {
        Some(dir) => dir,
        None => config::data_dir()?,
    };
    let store = JsonFileStore::new(root);

    let snapshot = Rc::new(RefCell::new(Snapshot::default()));
    let sink = Rc::clone(&snapshot);
    let view = move |visible: &[Task], items_left: usize| {
        let mut snap = sink.borrow_mut();
        snap.visible = visible.to_vec();
        snap.items_left = items_left;
    };

    let mut engine = TaskListEngine::load(store, Box::new(UuidSource), Box::new(view))?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::Add { text } => engine.add_task(&text.join(" "))?,
        Commands::List => {}
        Commands::Done { n } => {
            let id = resolve(&engine, n)?;
            engine.toggle_task(id)?;
        }
        Commands::Edit { n, text } => {
            let id = resolve(&engine, n)?;
            let mut session = engine.begin_edit(id).ok_or(TodozError::UnknownIndex(n))?;
            session.set_buffer(text.join(" "));
            engine.commit_edit(session)?;
        }
        Commands::Delete { n } => {
            let id = resolve(&engine, n)?;
            engine.delete_task(id)?;
        }
        Commands::Clear => engine.clear_completed()?,
        Commands::Filter { which } => engine.set_filter(which)?,
    }

    render::print_list(&snapshot.borrow(), engine.filter());
    Ok(())
}

/// Tasks are addressed by their 1-based position in the *visible* list;
/// ids stay internal.
fn resolve(engine: &TaskListEngine<JsonFileStore>, n: usize) -> Result<Uuid> {
    n.checked_sub(1)
        .and_then(|i| engine.visible_tasks().get(i).map(|t| t.id))
        .ok_or(TodozError::UnknownIndex(n))
}
