//! Command-line surface.
//!
//! Each subcommand maps onto one view of the original application:
//! the inventory list with its filters, the registration form, the
//! status/field update and delete actions, and the login screen.

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "nexus-inventory", version, about = "Equipment inventory manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List assets, optionally filtered by search text and category
    List {
        /// Case-insensitive substring match against asset names
        #[arg(long, default_value = "")]
        search: String,
        /// Category to show, or "all"
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Register a new asset
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        /// Monetary value, must be positive
        #[arg(long)]
        value: f64,
        #[arg(long)]
        serial: Option<String>,
        /// active | maintenance | retired | lost (default: active)
        #[arg(long)]
        status: Option<String>,
        /// Purchase date as RFC 3339 (default: now)
        #[arg(long)]
        purchased: Option<String>,
    },

    /// Update fields on an existing asset
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        value: Option<f64>,
        #[arg(long)]
        serial: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        purchased: Option<String>,
    },

    /// Delete an asset
    Delete { id: Uuid },

    /// Sign in to the hosted backend
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account on the hosted backend
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out and clear the cached session
    Logout,

    /// Show the signed-in user
    Whoami,
}
