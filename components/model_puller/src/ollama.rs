// components/model_puller/src/ollama.rs
use std::io::{Read, Write};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::types::{PullError, Puller};

/// Pulls models with the `ollama` CLI found on the search path.
pub struct OllamaCli {
    program: String,
}

impl OllamaCli {
    pub fn new() -> Self {
        Self::with_program("ollama")
    }

    fn with_program(program: &str) -> Self {
        Self {
            program: program.to_owned(),
        }
    }
}

impl Default for OllamaCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Puller for OllamaCli {
    async fn pull(&self, model: &str) -> Result<(), PullError> {
        which::which(&self.program).map_err(|_| PullError::ToolNotFound)?;

        // One pipe backs both stdout and stderr, so the merged stream
        // carries bytes in exactly the order the tool wrote them.
        let (merged, writer) = std::io::pipe()?;
        let stdout_end = writer.try_clone()?;

        tracing::debug!(model, "spawning ollama pull");
        let mut child = Command::new(&self.program)
            .arg("pull")
            .arg(model)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_end))
            .stderr(Stdio::from(writer))
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => PullError::ToolNotFound,
                _ => PullError::Io(e),
            })?;

        // The parent's copies of the write end died with the spawn call
        // above, so the relay sees EOF once the child has exited and its
        // last output has drained.
        let relay_task = tokio::task::spawn_blocking(move || {
            let mut console = std::io::stdout().lock();
            relay(merged, &mut console)
        });
        relay_task
            .await
            .map_err(|e| PullError::Io(std::io::Error::other(e)))??;

        let status = child.wait().await?;
        tracing::debug!(model, %status, "ollama pull exited");

        if status.success() {
            Ok(())
        } else {
            Err(PullError::PullFailed {
                model: model.to_owned(),
                status,
            })
        }
    }
}

/// Copy the merged child output to the console as it arrives.
///
/// A pipe read returns as soon as any bytes are available, and every chunk
/// is flushed immediately, so progress text (including carriage-return
/// redraws) shows up live rather than after the pull finishes.
fn relay<R, W>(mut reader: R, console: &mut W) -> std::io::Result<()>
where
    R: Read,
    W: Write,
{
    let mut buf = [0u8; 256];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            return Ok(());
        }
        console.write_all(&buf[..n])?;
        console.flush()?;
    }
}

#[cfg(test)]
pub mod stub {
    use std::sync::Mutex;

    use super::*;

    /// Records the order models were pulled in and fails on request.
    pub struct PullerStub {
        pub calls: Mutex<Vec<String>>,
        fail_on: Option<String>,
        missing_tool: bool,
    }

    impl PullerStub {
        pub fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: None,
                missing_tool: false,
            }
        }

        pub fn failing_on(model: &str) -> Self {
            Self {
                fail_on: Some(model.to_owned()),
                ..Self::ok()
            }
        }

        pub fn without_tool() -> Self {
            Self {
                missing_tool: true,
                ..Self::ok()
            }
        }
    }

    #[async_trait]
    impl Puller for PullerStub {
        async fn pull(&self, model: &str) -> Result<(), PullError> {
            self.calls.lock().unwrap().push(model.to_owned());
            if self.missing_tool {
                return Err(PullError::ToolNotFound);
            }
            match &self.fail_on {
                Some(bad) if bad == model => {
                    Err(PullError::Io(std::io::Error::other("stub pull failure")))
                }
                _ => Ok(()),
            }
        }
    }
}
