//! Item management commands.

use crate::cli::common::{load_config, save_store, CliError, CliResult, GlobalArgs};
use crate::error::StoreError;
use crate::models::Item;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage items within categories
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Item subcommand
    #[command(subcommand)]
    pub command: ItemCommand,
}

/// Item management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ItemCommand {
    /// List the items of a category
    List(ListItemsArgs),
    /// Add an item to a category
    Add(AddItemArgs),
    /// Remove the first item matching a description
    Remove(RemoveItemArgs),
    /// Move an item to another category
    Move(MoveItemArgs),
}

/// List the items of a category
#[derive(Debug, Clone, Args)]
pub struct ListItemsArgs {
    /// Category to list
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add an item to a category
#[derive(Debug, Clone, Args)]
pub struct AddItemArgs {
    /// Category to add to
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Item description (e.g., laptop, toothbrush)
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Season: s (summer), w (winter) or n (neutral). Defaults to the configured season.
    #[arg(short, long, value_name = "SEASON")]
    pub season: Option<String>,

    /// Display position within the category (clamped to the list bounds)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub index: Option<i64>,
}

/// Remove an item from a category
#[derive(Debug, Clone, Args)]
pub struct RemoveItemArgs {
    /// Category holding the item
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Description of the item to remove
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,
}

/// Move an item between categories
#[derive(Debug, Clone, Args)]
pub struct MoveItemArgs {
    /// Category currently holding the item
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Description of the item to move
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Destination category
    #[arg(value_name = "TO")]
    pub to: String,
}

#[derive(Debug, Serialize)]
struct ListItemsResponse<'a> {
    category: &'a str,
    items: &'a [Item],
    count: usize,
}

impl ItemArgs {
    /// Execute the item command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        match &self.command {
            ItemCommand::List(args) => args.execute(globals),
            ItemCommand::Add(args) => args.execute(globals),
            ItemCommand::Remove(args) => args.execute(globals),
            ItemCommand::Move(args) => args.execute(globals),
        }
    }
}

impl ListItemsArgs {
    /// Execute the list command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (store, _) = globals.load(&config)?;

        let category = store
            .category(&self.category)
            .ok_or_else(|| StoreError::CategoryNotFound(self.category.trim().to_string()))?;

        if self.json {
            let response = ListItemsResponse {
                category: &category.name,
                items: &category.items,
                count: category.items.len(),
            };
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if category.items.is_empty() {
            println!("No items in '{}'.", category.name);
        } else {
            println!("Items in {} ({}):", category.name, category.items.len());
            println!();
            for (i, item) in category.items.iter().enumerate() {
                let index = item
                    .index
                    .map(|idx| format!("index {idx}"))
                    .unwrap_or_default();
                println!(
                    "  {:>3}. {:<30} {:<8} {}",
                    i + 1,
                    item.description,
                    item.season.label(),
                    index
                );
            }
        }

        Ok(())
    }
}

impl AddItemArgs {
    /// Execute the add command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (mut store, path) = globals.load(&config)?;

        let season = self
            .season
            .clone()
            .unwrap_or_else(|| config.ui.default_season.to_string());
        let position = store.add_item(&self.category, &self.description, &season, self.index)?;
        save_store(&store, &path)?;

        println!(
            "Added '{}' to '{}' at position {}.",
            self.description.trim(),
            self.category.trim(),
            position + 1
        );
        Ok(())
    }
}

impl RemoveItemArgs {
    /// Execute the remove command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (mut store, path) = globals.load(&config)?;

        let removed = store.remove_item(&self.category, &self.description)?;
        save_store(&store, &path)?;

        println!(
            "Removed '{}' from '{}'.",
            removed.description,
            self.category.trim()
        );
        Ok(())
    }
}

impl MoveItemArgs {
    /// Execute the move command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (mut store, path) = globals.load(&config)?;

        store.move_item(&self.from, &self.description, &self.to)?;
        save_store(&store, &path)?;

        println!(
            "Moved '{}' from '{}' to '{}'.",
            self.description.trim(),
            self.from.trim(),
            self.to.trim()
        );
        Ok(())
    }
}
