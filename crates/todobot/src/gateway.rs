//! Chat platform seam. The real platform (gateway connection, command
//! registration, message delivery) is an external collaborator; the bot
//! only needs a stream of invocations in and replies/DMs out. The console
//! gateway is the built-in implementation for running locally.

use crate::cmd;
use crate::invocation::Invocation;
use crate::store::SharedStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Outbound direct messages, used only by the reminder sweep.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn direct_message(&self, user_id: &str, text: &str) -> anyhow::Result<()>;
}

pub type SharedNotifier = Arc<dyn Notifier>;

// ---------------------------------------------------------------------------
// Console gateway
// ---------------------------------------------------------------------------

/// Reads invocations line by line from stdin and prints replies to stdout;
/// direct messages are printed with a `[DM -> user]` prefix.
pub struct ConsoleGateway {
    user_id: String,
}

impl ConsoleGateway {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Drive the session until stdin closes.
    pub async fn run(&self, store: SharedStore) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line, &self.user_id) {
                Some(inv) => {
                    let reply = cmd::dispatch(&store, &inv).await;
                    println!("{reply}");
                }
                None => println!("Commands: add, list, remove, search, update"),
            }
        }
        tracing::info!("console session closed");
        Ok(())
    }
}

#[async_trait]
impl Notifier for ConsoleGateway {
    async fn direct_message(&self, user_id: &str, text: &str) -> anyhow::Result<()> {
        println!("[DM -> {user_id}] {text}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Parse `command [bare words…] [key=value…]` into an invocation.
///
/// Bare words join into the command's primary option (`item` for add,
/// `keyword` for search, `index` for remove/update), so
/// `add buy milk due_date=2026-09-01 priority=high` reads naturally.
pub fn parse_line(line: &str, user_id: &str) -> Option<Invocation> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let mut inv = Invocation::new(&command, user_id);
    let mut bare: Vec<&str> = Vec::new();
    for token in parts {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                inv.options.insert(key.to_lowercase(), value.to_string());
            }
            _ => bare.push(token),
        }
    }
    if !bare.is_empty() {
        let primary = match command.as_str() {
            "add" => "item",
            "search" => "keyword",
            "remove" | "update" => "index",
            _ => return Some(inv),
        };
        inv.options
            .entry(primary.to_string())
            .or_insert_with(|| bare.join(" "));
    }
    Some(inv)
}
