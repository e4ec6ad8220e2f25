use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a poll.
    Create(CreateArgs),
    /// Edit an existing poll.
    Update(UpdateArgs),
    /// Show one poll.
    Get(IdArgs),
    /// List polls page by page.
    List(ListArgs),
    /// Delete a poll.
    Delete(IdArgs),
    /// Print the JSON schema of the wire payload.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Poll title
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Expiration date (YYYY-MM-DD)
    #[arg(long)]
    pub expiration: Option<String>,

    /// An option to vote on (repeatable, kept in order)
    #[arg(long = "option")]
    pub options: Vec<String>,

    /// A voter (repeatable, kept in order)
    #[arg(long = "voter")]
    pub voters: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Poll id
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    /// New description; an empty value clears it
    #[arg(long)]
    pub description: Option<String>,

    /// New expiration date (YYYY-MM-DD); an empty value clears it
    #[arg(long)]
    pub expiration: Option<String>,

    /// Replace all options (repeatable)
    #[arg(long = "option", conflicts_with_all = ["add_options", "remove_last_option"])]
    pub options: Vec<String>,

    /// Append an option (repeatable)
    #[arg(long = "add-option")]
    pub add_options: Vec<String>,

    /// Drop the last N options before appending
    #[arg(long, default_value_t = 0)]
    pub remove_last_option: usize,

    /// Replace all voters (repeatable)
    #[arg(long = "voter", conflicts_with_all = ["add_voters", "remove_last_voter"])]
    pub voters: Vec<String>,

    /// Append a voter (repeatable)
    #[arg(long = "add-voter")]
    pub add_voters: Vec<String>,

    /// Drop the last N voters before appending
    #[arg(long, default_value_t = 0)]
    pub remove_last_voter: usize,
}

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    /// Poll id
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Zero-based page index
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size (defaults to general.default_page_size)
    #[arg(long)]
    pub size: Option<u32>,

    /// Sort criterion such as `title,desc` (repeatable, defaults to general.default_sort)
    #[arg(long)]
    pub sort: Vec<String>,

    /// Free-text query
    #[arg(long)]
    pub query: Option<String>,
}
