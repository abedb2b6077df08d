use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "game-crud")]
#[command(author, version, about = "Manage games on a games REST backend - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend URL, overrides server_url from the config file
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all games
    List,

    /// Show one game
    Info {
        /// Identifier of the game
        game_id: String,
    },

    /// Create a game
    Create {
        /// Display name of the game
        name: String,

        /// Description of the game
        #[arg(short, long, default_value = "")]
        description: String,

        /// Status, defaults to the first configured status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Update a game, keeping any field that is not given
    Update {
        /// Identifier of the game
        game_id: String,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete a game
    Delete {
        /// Identifier of the game
        game_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show status and configuration
    Status,

    /// Launch the GUI
    Gui,
}
