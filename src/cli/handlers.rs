use crate::cli::commands::*;
use crate::cli::output::{TodoJson, TodoListJson, format_todo_line};
use crate::io::backend::{JsonFileBackend, PersistError, StoreBackend};
use crate::io::config_io;
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::store::TodoStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    // The TUI (no subcommand) is launched from main.rs before dispatch
    let Some(command) = cli.command else {
        return Ok(());
    };

    let backend = open_backend(cli.file.as_deref())?;
    let mut store = load_store(&backend)?;

    match command {
        Commands::List => cmd_list(&store, json),
        Commands::Add(args) => {
            let id = store.add(&args.title, &args.description)?;
            save_store(&backend, &store)?;
            println!("added {}", id);
            Ok(())
        }
        Commands::Edit(args) => {
            store.edit(args.id, &args.title, &args.description)?;
            save_store(&backend, &store)?;
            println!("edited {}", args.id);
            Ok(())
        }
        Commands::Toggle(args) => {
            let done = store.toggle_done(args.id)?;
            save_store(&backend, &store)?;
            println!("{} {}", if done { "done" } else { "reopened" }, args.id);
            Ok(())
        }
        Commands::Delete(args) => {
            let removed = store.delete(args.id)?;
            save_store(&backend, &store)?;
            println!("deleted {} ({})", removed.id, removed.title);
            Ok(())
        }
        Commands::Clear => {
            let count = store.clear();
            save_store(&backend, &store)?;
            println!("cleared {} todo{}", count, if count == 1 { "" } else { "s" });
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_backend(file_flag: Option<&str>) -> Result<JsonFileBackend, Box<dyn std::error::Error>> {
    let config = config_io::load_config()?;
    let path = config_io::resolve_data_file(file_flag, &config);
    Ok(JsonFileBackend::new(path))
}

/// Load the store, falling back to empty on a corrupt file. The corrupt
/// content goes to the recovery log first, so the next save cannot destroy
/// the only copy of the list.
fn load_store(backend: &JsonFileBackend) -> Result<TodoStore, Box<dyn std::error::Error>> {
    match backend.load() {
        Ok(todos) => Ok(TodoStore::from_todos(todos)),
        Err(PersistError::Parse { path, source }) => {
            let raw = backend.raw_content().unwrap_or_default();
            log_recovery(
                backend.path(),
                RecoveryEntry::new(RecoveryCategory::Parse, "list not restored", &raw),
            );
            eprintln!(
                "warning: could not parse {}: {}; starting with an empty list (old content saved to .recovery.log)",
                path.display(),
                source
            );
            Ok(TodoStore::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Save the store; on failure, preserve the unsaved JSON in the recovery log
/// before propagating the error.
fn save_store(
    backend: &JsonFileBackend,
    store: &TodoStore,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = backend.save(store.todos()) {
        let body = serde_json::to_string_pretty(store.todos()).unwrap_or_default();
        log_recovery(
            backend.path(),
            RecoveryEntry::new(RecoveryCategory::Write, "save failed", &body),
        );
        return Err(e.into());
    }
    Ok(())
}

fn cmd_list(store: &TodoStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = TodoListJson {
            todos: store.todos().iter().map(TodoJson::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("no todos");
        return Ok(());
    }
    for todo in store.todos() {
        println!("{}", format_todo_line(todo));
    }
    Ok(())
}
