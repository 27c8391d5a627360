//! Subprocess runner with captured diagnostics.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

use crate::modules::frames::error::FrameJobError;

/// A single invocation of an external tool.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    /// Name used in error messages ("ffmpeg", "yt-dlp")
    tool: &'static str,
    /// Binary name on PATH or absolute path
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(tool: &'static str, program: impl Into<String>) -> Self {
        Self {
            tool,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy().into_owned();
        self.arg(path)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn resolve(&self) -> Result<PathBuf, FrameJobError> {
        which::which(&self.program).map_err(|e| {
            FrameJobError::tool_launch(self.tool, format!("{} not found: {}", self.program, e))
        })
    }

    /// Run to completion; dropping the future kills the child. Non-zero exit becomes [`FrameJobError::ToolFailed`]
    /// carrying the exit code and trimmed stderr.
    pub async fn run(&self) -> Result<Output, FrameJobError> {
        let program = self.resolve()?;
        debug!("Running {}: {} {}", self.tool, program.display(), self.args.join(" "));

        let output = Command::new(&program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| FrameJobError::tool_launch(self.tool, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} stderr: {}", self.tool, stderr);
            return Err(FrameJobError::tool_failed(
                self.tool,
                output.status.code(),
                stderr.trim(),
            ));
        }

        Ok(output)
    }
}
