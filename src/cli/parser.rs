use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for coachboard
/// CLI application to track client training status with SQLite and JSON
#[derive(Parser)]
#[command(
    name = "coachboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track client training status, render status timelines and export coach dashboards",
    long_about = None
)]
pub struct Cli {
    /// Override client database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override status document directory (useful for tests)
    #[arg(global = true, long = "status-dir")]
    pub status_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, configuration and status document root
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "filter", help = "Only show rows matching this regex")]
        filter: Option<String>,
    },

    /// Manage the client directory
    Client {
        #[command(subcommand)]
        action: ClientCmd,
    },

    /// Manage client groups
    Group {
        #[command(subcommand)]
        action: GroupCmd,
    },

    /// Record a new training status for a client
    Add {
        /// Client id (see `client list`)
        client_id: String,

        /// New status: full, modified, rehab or none (or f/m/r/n)
        #[arg(long = "status")]
        status: String,

        /// Effective date (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Restrictions & comments for the new status
        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Correct the date or comment of an existing history entry
    Edit {
        /// Client id
        client_id: String,

        /// History entry number as shown by `show` (1-based)
        #[arg(long = "entry")]
        entry: usize,

        /// New date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        /// New comment
        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Remove a history entry
    Del {
        /// Client id
        client_id: String,

        /// History entry number as shown by `show` (1-based)
        #[arg(long = "entry")]
        entry: usize,

        /// Skip the confirmation prompt
        #[arg(long = "yes")]
        yes: bool,
    },

    /// Show one client's status record, history and timeline
    Show {
        /// Client id
        client_id: String,
    },

    /// Show the coach board: active athletes grouped by current status
    List {
        /// Restrict the board to one group id
        #[arg(long = "group")]
        group: Option<i64>,
    },

    /// Export the coach board
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "group", help = "Restrict the export to one group id")]
        group: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup archive of the database and status documents
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum ClientCmd {
    /// Add a client to the directory
    Add {
        first_name: String,
        last_name: String,

        /// Explicit client id (default: next free C-number)
        #[arg(long = "id")]
        id: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "mobile")]
        mobile: Option<String>,

        /// Register a coach account instead of an athlete
        #[arg(long = "coach")]
        coach: bool,
    },

    /// List directory entries
    List {
        /// Restrict the listing to one group id
        #[arg(long = "group")]
        group: Option<i64>,

        /// Include archived clients
        #[arg(long = "all")]
        all: bool,
    },

    /// Archive a client (hides them from the board)
    Archive {
        client_id: String,
    },
}

#[derive(Subcommand)]
pub enum GroupCmd {
    /// Create a new group
    Create { name: String },

    /// Add a client to a group
    Join {
        group_id: i64,
        client_id: String,

        #[arg(long = "role", default_value = "Athlete")]
        role: String,
    },

    /// List groups with member counts
    List,
}
