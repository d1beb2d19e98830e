use clap::{Parser, Subcommand, command};

#[derive(Parser)]
#[command()]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a person and print it with its age
    Show {
        /// The person's name
        name: String,
        /// Birth date, formatted YYYY-MM-DD
        #[arg(long)]
        birth: Option<String>,
    },
    /// Create the two sample people and print them
    Demo,
}
