use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] todos v", env!("CARGO_PKG_VERSION"), " - a single-screen todo list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different todo list file
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all todos
    List,
    /// Add a todo
    Add(AddArgs),
    /// Replace a todo's title and description
    Edit(EditArgs),
    /// Toggle a todo between done and open
    Toggle(ToggleArgs),
    /// Delete a todo
    Delete(DeleteArgs),
    /// Delete every todo
    Clear,
}

#[derive(Args)]
pub struct AddArgs {
    /// Title of the new todo
    pub title: String,
    /// Description of the new todo
    pub description: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Id of the todo to edit
    pub id: u64,
    /// New title
    pub title: String,
    /// New description
    pub description: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Id of the todo to toggle
    pub id: u64,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the todo to delete
    pub id: u64,
}
