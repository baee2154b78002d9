//! Category management commands.
//!
//! Provides commands to list, add, delete, and rename categories.

use crate::cli::common::{load_config, save_store, CliError, CliResult, GlobalArgs};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage categories
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    List(ListCategoriesArgs),
    /// Add a new, empty category
    Add(AddCategoryArgs),
    /// Delete a category and all of its items
    Delete(DeleteCategoryArgs),
    /// Rename a category, keeping its items
    Rename(RenameCategoryArgs),
}

/// List all categories
#[derive(Debug, Clone, Args)]
pub struct ListCategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new category
#[derive(Debug, Clone, Args)]
pub struct AddCategoryArgs {
    /// Category name (e.g., tech, clothing, health, personal-care)
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Delete a category
#[derive(Debug, Clone, Args)]
pub struct DeleteCategoryArgs {
    /// Category to delete
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Rename a category
#[derive(Debug, Clone, Args)]
pub struct RenameCategoryArgs {
    /// Current category name
    #[arg(value_name = "OLD")]
    pub old: String,

    /// New category name
    #[arg(value_name = "NEW")]
    pub new: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategorySummary {
    name: String,
    items: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategorySummary>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        match &self.command {
            CategoryCommand::List(args) => args.execute(globals),
            CategoryCommand::Add(args) => args.execute(globals),
            CategoryCommand::Delete(args) => args.execute(globals),
            CategoryCommand::Rename(args) => args.execute(globals),
        }
    }
}

impl ListCategoriesArgs {
    /// Execute the list command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (store, _) = globals.load(&config)?;

        let categories: Vec<_> = store
            .categories()
            .iter()
            .map(|c| CategorySummary {
                name: c.name.clone(),
                items: c.items.len(),
            })
            .collect();

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            println!();
            for cat in response.categories {
                println!("  {:<30} {} item(s)", cat.name, cat.items);
            }
        }

        Ok(())
    }
}

impl AddCategoryArgs {
    /// Execute the add command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (mut store, path) = globals.load(&config)?;

        store.add_category(&self.name)?;
        save_store(&store, &path)?;

        println!("Category '{}' added.", self.name.trim());
        Ok(())
    }
}

impl DeleteCategoryArgs {
    /// Execute the delete command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (mut store, path) = globals.load(&config)?;

        let removed = store.remove_category(&self.name)?;
        save_store(&store, &path)?;

        println!(
            "Category '{}' deleted ({} item(s) removed).",
            removed.name,
            removed.items.len()
        );
        Ok(())
    }
}

impl RenameCategoryArgs {
    /// Execute the rename command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (mut store, path) = globals.load(&config)?;

        store.rename_category(&self.old, &self.new)?;
        save_store(&store, &path)?;

        println!(
            "Category '{}' renamed to '{}'.",
            self.old.trim(),
            self.new.trim()
        );
        Ok(())
    }
}
