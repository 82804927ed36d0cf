use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notebook", bin_name = "notebook", version)]
#[command(about = "Markdown notes and pasted images in your user-data directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// User-data directory (defaults to $NOTEBOOK_USER_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub user_data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new note (reads stdin when no content is given)
    #[command(alias = "n")]
    New {
        /// Note content; words are joined with spaces
        content: Vec<String>,
    },

    /// List stored notes, newest first
    #[command(alias = "ls")]
    List,

    /// Print a note's content
    #[command(alias = "v")]
    Show { path: PathBuf },

    /// Overwrite a note (reads stdin when no content is given)
    Update {
        path: PathBuf,

        /// New content; words are joined with spaces
        content: Vec<String>,
    },

    /// Delete a note file
    #[command(alias = "rm")]
    Delete { path: PathBuf },

    /// Print any local text file (fails if it does not exist)
    Read { path: PathBuf },

    /// Clipboard image commands
    #[command(subcommand)]
    Image(ImageCommands),

    /// Print the notebook directories
    Paths,

    /// Print the current local time
    Time,

    /// Upper-case text
    Format {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Fetch a URL and print its JSON body
    Fetch { url: String },

    /// Run a plugin action
    Action {
        /// Action name (e.g. hello)
        name: String,

        /// JSON parameters passed to the action
        params: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (note-ext, image-ext, image-markers)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// Save base64 image data (reads stdin when omitted)
    Save { data: Option<String> },

    /// List local images referenced by a note
    Refs {
        /// Note file to scan
        path: PathBuf,

        /// Only report whether any are referenced
        #[arg(long)]
        check: bool,
    },

    /// Delete an image file
    #[command(alias = "rm")]
    Delete { path: PathBuf },
}
