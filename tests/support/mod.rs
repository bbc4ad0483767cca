use anyhow::{Context, Result, bail};
use std::process::{Command, Output};

/// Run a helper binary to completion, failing loudly with both streams when
/// the exit status is non-zero.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a helper binary that is expected to fail.
///
/// Returns the raw output so callers can assert on the exit code and the
/// stderr wording instead of just "it failed".
pub fn run_expecting_failure(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!("command {:?} unexpectedly succeeded", cmd);
    }
    Ok(output)
}
