//! Command-line arguments of the terminal viewer.

use std::path::PathBuf;

use clap::Parser;

use catalogview_catalog::FilterAction;

use crate::config::{DataSource, DATA_DIR_ENV};

/// Browse the product catalog, filtered by owner, name and category.
#[derive(Debug, Parser)]
#[command(name = "catalog-viewer", version)]
pub struct Cli {
    /// Directory with users.json, categories.json and products.json
    /// (bundled data when omitted).
    #[arg(long, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Show only products whose category is owned by this user (exact name).
    #[arg(long)]
    pub user: Option<String>,

    /// Case-insensitive substring of the product name.
    #[arg(long)]
    pub search: Option<String>,

    /// Category title to include; repeat to include several.
    #[arg(long = "category", value_name = "TITLE")]
    pub categories: Vec<String>,

    /// Print the visible products as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn data_source(&self) -> DataSource {
        DataSource::from_dir(self.data_dir.clone())
    }

    /// The control actions equivalent to the given flags, in apply order.
    pub fn filter_actions(&self) -> Vec<FilterAction> {
        let user = self.user.iter().cloned().map(FilterAction::SelectUser);
        let search = self.search.iter().cloned().map(FilterAction::SetSearchQuery);
        let categories = self.categories.iter().cloned().map(FilterAction::SelectCategory);
        user.chain(search).chain(categories).collect()
    }
}
