use anyhow::{bail, Context, Result};
use family_tree::tree::IdGenerator;
use family_tree::TreeDocument;
use tree_store::{JsonFileStore, TreeStore};

use crate::app::{FamilyTreeApp, SaveOutcome, NOTICE_UNCHANGED};
use crate::cli::{Cli, Command};
use crate::config::AppConfig;

/// Execute one parsed command line against the configured store
///
/// Mutating commands save afterwards unless the tree did not change; a refused
/// secret is reported as an error.
pub fn run(cli: Cli, mut config: AppConfig) -> Result<()> {
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }
    let store = JsonFileStore::new(&config.store_path);
    let mut app = FamilyTreeApp::open(config, store)?;

    match &cli.command {
        Command::Show { depth } => {
            print!("{}", app.outline(*depth));
        }
        Command::Stats => {
            let stats = app.stats();
            println!("Total members: {}", stats.total_members);
            println!("Generations: {}", stats.generations);
        }
        Command::Export { output } => {
            let path = app.export(output.as_deref())?;
            println!("Exported to {}", path.display());
        }
        Command::Import { file } => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            if !app.import(&TreeDocument::from_json_str(&text)?) {
                println!("{NOTICE_UNCHANGED}");
                return Ok(());
            }
            return save(&mut app, cli.secret.as_deref());
        }
        command => {
            let changed = command.intent().is_some_and(|intent| app.edit(intent));
            if !changed {
                println!("{NOTICE_UNCHANGED}");
                return Ok(());
            }
            return save(&mut app, cli.secret.as_deref());
        }
    }

    Ok(())
}

fn save<S: TreeStore, G: IdGenerator>(
    app: &mut FamilyTreeApp<S, G>,
    secret: Option<&str>,
) -> Result<()> {
    let outcome = app.save(secret)?;
    if outcome == SaveOutcome::Rejected {
        bail!(outcome.notice());
    }
    println!("{}", outcome.notice());
    Ok(())
}
