//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod products;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: Option<ProductsCommand>,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products in the admin table.
    List {
        /// Only products whose name contains this text.
        #[arg(short, long)]
        search: Option<String>,

        /// Sort column: name, price or sales.
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending.
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to show (1-indexed).
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Show the detail page of a product.
    Show {
        /// Product ID.
        id: String,

        /// Page of related products to show.
        #[arg(long, default_value = "1")]
        related_page: usize,

        /// Gallery image to show as active (0-indexed).
        #[arg(long)]
        image: Option<usize>,
    },
    /// Create a product.
    Add(ProductFields),
    /// Edit a product. Unset fields keep their current value.
    Edit {
        /// Product ID.
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,

        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Editable product fields.
#[derive(Args, Default)]
pub struct ProductFields {
    /// Product name.
    #[arg(long)]
    pub name: Option<String>,

    /// Price in VND.
    #[arg(long)]
    pub price: Option<String>,

    /// Parent category.
    #[arg(long)]
    pub lv0: Option<String>,

    /// Child category.
    #[arg(long)]
    pub lv1: Option<String>,

    /// Common name.
    #[arg(long)]
    pub common_name: Option<String>,

    /// Scientific name.
    #[arg(long)]
    pub scientific_name: Option<String>,

    /// Plant family.
    #[arg(long)]
    pub plant_family: Option<String>,

    /// Mature height.
    #[arg(long)]
    pub height: Option<String>,

    /// Origin.
    #[arg(long)]
    pub origin: Option<String>,

    /// Short description.
    #[arg(long)]
    pub description: Option<String>,

    /// Care notes.
    #[arg(long)]
    pub describe: Option<String>,

    /// Image reference (repeatable). Replaces the current images.
    #[arg(long = "image")]
    pub images: Vec<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart.
    Add {
        /// Product ID.
        id: String,

        /// Quantity.
        #[arg(short, long, default_value = "1")]
        qty: String,
    },
    /// Set the quantity of a cart line. Zero removes it.
    Set {
        /// Product ID.
        id: String,

        /// New quantity.
        qty: u64,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Show the cart.
    Show,
    /// Empty the cart.
    Clear,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Customer email.
    pub email: String,

    /// Display name.
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
