//! Line-based chat console.

use std::io::Write;

use anyhow::Result;
use chatline_commands::{CommandResponse, CommandRouter};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::terminal_output::{format_status_line, stream_write};

/// Strip the chat prefix. Blank input yields `None`.
pub fn command_text(line: &str) -> Option<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let text = line.strip_prefix('/').unwrap_or(line);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn render(response: &CommandResponse, color: bool) -> String {
    response
        .lines
        .iter()
        .map(|line| format!("{}\n", format_status_line(line, color)))
        .collect()
}

/// Feed every input line through the router until EOF.
pub async fn run<R, W>(router: &mut CommandRouter, input: R, out: &mut W, color: bool) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(text) = command_text(&line) else {
            continue;
        };
        let response = router.process(text);
        debug!(lines = response.lines.len(), "Command processed");
        stream_write(out, &render(&response, color))?;
    }
    Ok(())
}
