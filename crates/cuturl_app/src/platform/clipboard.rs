use std::io::{self, Write};
use std::process::{Command, Stdio};

use cuturl_logging::cut_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available")]
    Unavailable,
    #[error("clipboard tool {tool} exited with {status}")]
    ToolFailed { tool: String, status: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Write-only access to the system clipboard.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into the platform's clipboard command.
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        copy_with(TOOLS, text)
    }
}

/// Tries each tool in order until one accepts `text`; reports the last failure otherwise.
fn copy_with(tools: &[(&str, &[&str])], text: &str) -> Result<(), ClipboardError> {
    let mut last_error = ClipboardError::Unavailable;
    for &(tool, args) in tools {
        match run_tool(tool, args, text) {
            Ok(()) => return Ok(()),
            Err(ClipboardError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                cut_debug!("Clipboard tool {} not found", tool);
            }
            Err(err) => {
                cut_debug!("Clipboard tool {} failed: {}", tool, err);
                last_error = err;
            }
        }
    }
    Err(last_error)
}

fn run_tool(tool: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Closing stdin before waiting lets the tool see end of input.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if !status.success() {
        return Err(ClipboardError::ToolFailed {
            tool: tool.to_string(),
            status: status.to_string(),
        });
    }
    Ok(())
}
