//! Print the whole store as YAML.

use crate::cli::common::{load_config, CliResult, GlobalArgs};
use crate::parser;
use crate::render;
use clap::Args;

/// Show all categories and items as YAML
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        let config = load_config()?;
        let (store, path) = globals.load(&config)?;

        let yaml = parser::serialize_store(&store)?;
        let color = render::color_enabled(config.ui.color && !globals.no_color);

        if color {
            println!("{}", render::colorize_yaml(&format!("# {}", path.display()), true));
        }
        println!("{}", render::colorize_yaml(yaml.trim_end(), color));
        Ok(())
    }
}
