use clap::{Parser, Subcommand, ValueEnum};
use mdnotes::model::BackendKind;
use mdnotes::search::SearchMode;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "mdnotes", bin_name = "mdnotes", version = get_version())]
#[command(
    about = "Personal Markdown note manager",
    long_about = "Personal Markdown note manager.\n\nRun without a command to start the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the notes (default: $MDNOTES_ROOT, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Use the per-user data directory as the root
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Storage backend, overrides the root's config
    #[arg(short, long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Note title
        title: String,

        /// Note body; omit to compose it in your editor
        content: Option<String>,

        /// Read the body from stdin
        #[arg(long, conflicts_with = "content")]
        stdin: bool,
    },

    /// Show a note
    #[command(alias = "v")]
    View {
        /// Note title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Render the Markdown body as HTML
        #[arg(long)]
        html: bool,
    },

    /// Replace a note's body, keeping a backup of the previous one
    #[command(alias = "e")]
    Edit {
        /// Note title
        title: String,

        /// New body, given inline instead of opening the editor
        #[arg(long, value_name = "CONTENT")]
        inline: Option<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Search notes by title or content
    #[command(alias = "s")]
    Search {
        /// Text to look for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Where to look
        #[arg(long = "in", short = 'i', value_enum, default_value_t = SearchArg::Title)]
        mode: SearchArg,
    },

    /// Write an HTML preview of a note
    Preview {
        /// Note title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Output file, relative to the root (default: the preview-file setting)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Print the storage location of a note
    Path {
        /// Note title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Show or change settings for the root
    Config {
        /// Setting to show or change (backend, editor, preview-file)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },

    /// Start the interactive menu
    Menu,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Flat,
    Aggregate,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Flat => BackendKind::Flat,
            BackendArg::Aggregate => BackendKind::Aggregate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchArg {
    Title,
    Content,
}

impl From<SearchArg> for SearchMode {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Title => SearchMode::Title,
            SearchArg::Content => SearchMode::Content,
        }
    }
}

/// Multi-word positional titles are joined back with single spaces.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
