use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resub")]
#[command(about = "Deterministic regex substitution rules for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the settings file (defaults to the platform data dir)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform text through the first matching rule
    #[command(alias = "a")]
    Apply {
        /// Text to transform (reads stdin when omitted)
        #[arg(required = false)]
        text: Option<String>,
    },

    /// Manage patterns
    #[command(subcommand, alias = "p")]
    Pattern(PatternCommands),

    /// Manage replacers
    #[command(subcommand, alias = "r")]
    Replacer(ReplacerCommands),

    /// Join a pattern to a replacer (e.g. resub link p1 r2)
    Link {
        /// Pattern index (e.g. p1)
        pattern: String,

        /// Replacer index (e.g. r2)
        replacer: String,
    },

    /// Remove a link
    Unlink {
        /// Link index (e.g. l1)
        link: String,
    },

    /// Enable a link
    Enable {
        /// Link index (e.g. l1)
        link: String,
    },

    /// Disable a link
    Disable {
        /// Link index (e.g. l1)
        link: String,
    },

    /// Annotate a link
    Comment {
        /// Link index (e.g. l1)
        link: String,

        /// Comment text
        text: String,
    },

    /// List patterns, replacers and links
    #[command(alias = "ls")]
    List,

    /// Turn the engine on
    On,

    /// Turn the engine off
    Off,

    /// Prune dangling links and report broken patterns
    Doctor,

    /// Migrate a settings file to the current format and print it
    Migrate {
        /// File to migrate (defaults to the active settings file)
        file: Option<PathBuf>,

        /// Rewrite the file in place instead of printing
        #[arg(long)]
        write: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PatternCommands {
    /// Add a pattern
    Add {
        /// Regular-expression source text
        text: String,
    },

    /// Remove a pattern (cascades to its links)
    #[command(alias = "rm")]
    Remove {
        /// Pattern index (e.g. p1)
        index: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReplacerCommands {
    /// Add a replacer
    Add {
        /// Template text ($& whole match, $1.. capture groups)
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Remove a replacer (cascades to its links)
    #[command(alias = "rm")]
    Remove {
        /// Replacer index (e.g. r1)
        index: String,
    },
}
