use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Show a random quote from the selected category")]
    Show,
    #[command(
        about = "Add a new quote",
        long_about = "Append a quote to the local collection. Both fields are trimmed and must be non-empty."
    )]
    Add {
        #[arg(long, value_name = "TEXT", help = "Quote text")]
        text: String,
        #[arg(long, value_name = "CATEGORY", help = "Quote category")]
        category: String,
    },
    #[command(about = "List categories, marking the selected one")]
    Categories,
    #[command(
        about = "Change the category filter",
        long_about = "Persist the category filter used by `show`. Use `all` to clear it."
    )]
    Filter {
        #[arg(value_name = "CATEGORY")]
        category: String,
    },
    #[command(about = "Export all quotes as pretty-printed JSON")]
    Export {
        #[arg(
            long,
            value_name = "PATH",
            default_value = "quotes.json",
            help = "Output file"
        )]
        out: std::path::PathBuf,
    },
    #[command(
        about = "Import quotes from a JSON file",
        long_about = "Append every quote of a JSON array file to the collection. Anything other than a top-level array is rejected."
    )]
    Import {
        #[arg(value_name = "PATH")]
        path: std::path::PathBuf,
    },
    #[command(about = "Fetch remote quotes and merge the new ones")]
    Sync,
    #[command(about = "Push all local quotes to the remote endpoint")]
    Push,
}
