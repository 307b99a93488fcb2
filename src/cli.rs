use crate::filter::FormQuery;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Find nodes in a node inventory by per-column comparisons
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file describing the column layout and display rules
    #[arg(short, long, global = true, env = "NODE_FINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Node inventory file (defaults to `data_file` from the config)
    #[arg(short, long, global = true, env = "NODE_FINDER_DATA")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the output to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print diagnostics to stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress warnings and diagnostics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether a diagnostic of the given level should be printed
    pub fn should_print(&self, required_level: u8) -> bool {
        if self.quiet {
            required_level == 0
        } else {
            self.verbose >= required_level
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the nodes that satisfy every given filter
    Find {
        #[command(flatten)]
        form: FormArgs,

        /// Filter expression, e.g. "port >= 80 & uptime > 3600" (repeatable)
        #[arg(short = 'w', long = "where", value_name = "EXPR")]
        expressions: Vec<String>,

        /// Show every column of the matching nodes in a table
        #[arg(long)]
        table: bool,
    },
    /// Summarize the inventory: row widths and per-column ranges
    Info,
}

/// One value/operator pair per filterable column. A blank value leaves the
/// column unconstrained; an unknown operator means `=`.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Build number
    #[arg(long, allow_hyphen_values = true)]
    pub build: Option<String>,
    #[arg(long, value_name = "OP")]
    pub build_op: Option<String>,

    /// Port
    #[arg(long, allow_hyphen_values = true)]
    pub port: Option<String>,
    #[arg(long, value_name = "OP")]
    pub port_op: Option<String>,

    /// Uptime in seconds
    #[arg(long, allow_hyphen_values = true)]
    pub uptime: Option<String>,
    #[arg(long, value_name = "OP")]
    pub uptime_op: Option<String>,

    /// Storage in MB
    #[arg(long, allow_hyphen_values = true)]
    pub storage: Option<String>,
    #[arg(long, value_name = "OP")]
    pub storage_op: Option<String>,

    /// X coordinate
    #[arg(long, allow_hyphen_values = true)]
    pub x_coord: Option<String>,
    #[arg(long, value_name = "OP")]
    pub x_coord_op: Option<String>,

    /// Y coordinate
    #[arg(long, allow_hyphen_values = true)]
    pub y_coord: Option<String>,
    #[arg(long, value_name = "OP")]
    pub y_coord_op: Option<String>,

    /// Estimate of network size
    #[arg(long, allow_hyphen_values = true)]
    pub estimate: Option<String>,
    #[arg(long, value_name = "OP")]
    pub estimate_op: Option<String>,
}

impl FormArgs {
    /// Only the columns the user touched end up in the query.
    pub fn to_form_query(&self) -> FormQuery {
        let pairs = [
            ("build", &self.build, &self.build_op),
            ("port", &self.port, &self.port_op),
            ("uptime", &self.uptime, &self.uptime_op),
            ("storage", &self.storage, &self.storage_op),
            ("x_coord", &self.x_coord, &self.x_coord_op),
            ("y_coord", &self.y_coord, &self.y_coord_op),
            ("estimate", &self.estimate, &self.estimate_op),
        ];

        pairs
            .into_iter()
            .filter(|(_, value, op)| value.is_some() || op.is_some())
            .fold(FormQuery::new(), |query, (column, value, op)| {
                query.field(column, value.clone(), op.clone())
            })
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
