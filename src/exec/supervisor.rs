// src/exec/supervisor.rs

//! Node process supervision.
//!
//! A [`Supervisor`] spawns one external node process, relays its merged
//! stdout/stderr line by line as it is produced, and blocks until the
//! process exits. Node processes are intentionally long-running, so
//! there is no timeout, retry, or health-check logic here; a supervised
//! process ends when it exits on its own or the operator signals it.

use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::{Result, StakerError};
use crate::exec::command::NodeCommand;
use crate::output::OutputSink;

pub struct Supervisor {
    sink: Arc<dyn OutputSink>,
}

impl Supervisor {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// Run `command` to completion.
    ///
    /// Echoes the full command through the sink before spawning, then
    /// relays every output line in arrival order. Returns `Ok(())` on a
    /// zero exit status, [`StakerError::ProcessFailed`] otherwise — in
    /// either case only after all output has been relayed, so the
    /// operator sees the process's own diagnostics before the failure.
    pub async fn run(&self, command: &NodeCommand) -> Result<()> {
        self.sink.line(&format!("Running: '{command}'"));

        let mut child = Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| StakerError::Spawn {
                command: command.to_string(),
                source,
            })?;

        debug!(cmd = %command, pid = child.id(), "node process spawned");

        // Merge both pipes into one channel. Each reader drains its pipe
        // independently, so a child writing faster than we relay cannot
        // fill an OS buffer and deadlock against wait().
        let (tx, mut rx) = mpsc::channel::<String>(64);

        if let Some(stdout) = child.stdout.take() {
            spawn_line_reader(stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_line_reader(stderr, tx.clone());
        }
        drop(tx);

        // The channel closes once both pipes hit EOF, which also covers
        // a child that exits without producing any output.
        while let Some(line) = rx.recv().await {
            self.sink.line(&line);
        }

        let status = child.wait().await?;
        let code = status.code().unwrap_or(-1);

        if status.success() {
            info!(cmd = %command, "node process exited cleanly");
            Ok(())
        } else {
            info!(cmd = %command, exit_code = code, "node process failed");
            Err(StakerError::ProcessFailed {
                command: command.to_string(),
                code,
            })
        }
    }
}

/// Forward complete lines from one pipe into the merge channel until EOF.
fn spawn_line_reader<R>(pipe: R, tx: mpsc::Sender<String>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(pipe).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });
}
