use std::path::PathBuf;

use clap::{Parser, Subcommand};
use family_tree::EditIntent;

use crate::config::DEFAULT_CONFIG_FILE;

/// Edit and export a family tree
#[derive(Debug, Parser)]
#[command(name = "family-tree", version)]
pub struct Cli {
    /// Config file (optional; defaults apply when it is missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Tree file, overriding the config
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Secret required to save when one is configured
    #[arg(long, global = true)]
    pub secret: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the tree as an indented outline
    Show {
        /// Stop expanding below this generation
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Print member and generation counts
    Stats,

    /// Rename a person
    Rename { id: String, name: String },

    /// Add an unnamed child under a person
    AddChild { id: String },

    /// Remove a person and all their descendants
    Delete { id: String },

    /// Collapse or expand a person
    Toggle { id: String },

    /// Add an empty spouse slot to a person
    AddSpouse { id: String },

    /// Rename the spouse at a position
    SetSpouse {
        id: String,
        index: usize,
        name: String,
    },

    /// Remove the spouse at a position
    DeleteSpouse { id: String, index: usize },

    /// Rename the father of the root couple
    SetFather { name: String },

    /// Rename the mother of the root couple
    SetMother { name: String },

    /// Replace the whole tree with a JSON document
    Import { file: PathBuf },

    /// Write every leveled view of the tree to a workbook
    Export {
        /// Output file, overriding the config
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// The edit this command performs, for commands that map to one intent
    pub fn intent(&self) -> Option<EditIntent> {
        let intent = match self {
            Command::Rename { id, name } => EditIntent::UpdateName {
                id: id.as_str().into(),
                name: name.clone(),
            },
            Command::AddChild { id } => EditIntent::AddChild { id: id.as_str().into() },
            Command::Delete { id } => EditIntent::DeleteNode { id: id.as_str().into() },
            Command::Toggle { id } => EditIntent::ToggleCollapse { id: id.as_str().into() },
            Command::AddSpouse { id } => EditIntent::AddSpouse { id: id.as_str().into() },
            Command::SetSpouse { id, index, name } => EditIntent::UpdateSpouse {
                id: id.as_str().into(),
                index: *index,
                name: name.clone(),
            },
            Command::DeleteSpouse { id, index } => EditIntent::DeleteSpouse {
                id: id.as_str().into(),
                index: *index,
            },
            Command::SetFather { name } => EditIntent::UpdateFather(name.clone()),
            Command::SetMother { name } => EditIntent::UpdateMother(name.clone()),
            Command::Show { .. } | Command::Stats | Command::Import { .. } | Command::Export { .. } => {
                return None
            }
        };
        Some(intent)
    }
}
