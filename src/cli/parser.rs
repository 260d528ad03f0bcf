use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for timesheets
#[derive(Parser)]
#[command(
    name = "timesheets",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track clients, jobs and work shifts with clock-in/clock-out using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is this instant (YYYY-MM-DD HH:MM:SS)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Register a new client
    Client {
        /// Contact name
        name: String,

        #[arg(long, default_value = "")]
        business: String,

        #[arg(long, default_value = "")]
        address: String,

        /// Unique e-mail, used to attach jobs to the client
        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Register a new billable job for a client
    Job {
        /// Unique job name
        name: String,

        #[arg(long = "client", help = "E-mail of the client owning the job")]
        client_email: String,

        #[arg(long, default_value_t = 0.0, help = "Hourly rate")]
        rate: f64,
    },

    /// Clock in: open a new shift for a job
    In {
        /// Job name
        job: String,
    },

    /// Clock out of the most recent shift
    Out {
        #[arg(long, short = 'n', help = "Describe the work done")]
        note: Option<String>,

        #[arg(
            long = "end",
            help = "Clock-out time to use if 'now' is not valid (YYYY-MM-DD HH:MM:SS)"
        )]
        end: Option<String>,

        #[arg(
            long = "no-prompt",
            conflicts_with = "end",
            help = "Fail instead of asking for a manual clock-out time"
        )]
        no_prompt: bool,
    },

    /// Add a complete shift manually
    Add {
        /// Job name
        job: String,

        #[arg(long = "in", help = "Clock-in (YYYY-MM-DD HH:MM:SS)")]
        start: String,

        #[arg(long = "out", help = "Clock-out (YYYY-MM-DD HH:MM:SS)")]
        end: String,

        #[arg(long, short = 'n')]
        note: Option<String>,
    },

    /// Delete a shift by id, or the last shift of a job
    #[command(group(ArgGroup::new("target").required(true).args(["id", "last"])))]
    Del {
        #[arg(long, help = "Shift id to delete")]
        id: Option<i64>,

        #[arg(long, value_name = "JOB", help = "Delete the most recent shift of this job")]
        last: Option<String>,
    },

    /// List all jobs
    Jobs,

    /// List the shifts recorded for a job
    Shifts {
        /// Job name
        job: String,
    },

    /// Show every detail of a job
    Show {
        /// Job name
        job: String,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
