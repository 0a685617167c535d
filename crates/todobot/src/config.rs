use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Runtime configuration, from flags or environment.
#[derive(Parser, Debug)]
#[command(
    name = "todobot",
    about = "Todo-list chat bot with recurring-task and reminder sweeps",
    version
)]
pub struct Config {
    /// Chat platform credential, consumed by whatever gateway fronts the
    /// bot. The console gateway ignores it.
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Storage backend for todo records.
    #[arg(long, env = "TODO_BACKEND", value_enum, default_value_t = Backend::File)]
    pub backend: Backend,

    /// Path of the YAML list used by the file backend.
    #[arg(long, env = "TODO_FILE", default_value = "todos.yaml")]
    pub data_file: PathBuf,

    /// Base URL of the PocketBase instance used by the remote backend.
    #[arg(long, env = "POCKETBASE_URL", default_value = "http://127.0.0.1:8090/")]
    pub store_url: String,

    /// Seconds between sweep ticks.
    #[arg(long, env = "SWEEP_INTERVAL_SECS", default_value_t = 60)]
    pub sweep_interval_secs: u64,

    /// User id attributed to records created from the console session;
    /// reminders for those records come back as console direct messages.
    #[arg(long, env = "BOT_USER_ID", default_value = "console")]
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Flat YAML file, whole-list read-modify-write.
    File,
    /// PocketBase `todos` collection over HTTP.
    Remote,
}
