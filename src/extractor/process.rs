// Child process helpers shared by the yt-dlp runners

use std::io::ErrorKind;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use super::errors::ExtractError;

/// Run command with timeout; the child is killed when the limit is hit
/// or when the returned future is dropped.
pub async fn run_output_with_timeout(
    program: &str,
    args: Vec<String>,
    timeout_secs: u64,
) -> Result<Output, ExtractError> {
    let mut child = TokioCommand::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::ToolNotFound(program.to_string()),
            _ => ExtractError::ExecutionError(format!("Failed to start {}: {}", program, e)),
        })?;

    let mut stdout_pipe = child.stdout.take().ok_or_else(|| {
        ExtractError::ExecutionError(format!("Failed to capture stdout from {}", program))
    })?;
    let mut stderr_pipe = child.stderr.take().ok_or_else(|| {
        ExtractError::ExecutionError(format!("Failed to capture stderr from {}", program))
    })?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });

    match timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Ok(status_res) => {
            let status = status_res.map_err(|e| {
                ExtractError::ExecutionError(format!("Failed to wait for {}: {}", program, e))
            })?;
            let stdout = join_pipe(stdout_task, "stdout").await?;
            let stderr = join_pipe(stderr_task, "stderr").await?;
            Ok(Output { status, stdout, stderr })
        }
        Err(_) => {
            let _ = child.kill().await;
            stdout_task.abort();
            stderr_task.abort();
            tracing::warn!(program, timeout_secs, "child process timed out, killed");
            Err(ExtractError::NetworkTimeout)
        }
    }
}

async fn join_pipe(
    task: tokio::task::JoinHandle<std::io::Result<Vec<u8>>>,
    stream: &str,
) -> Result<Vec<u8>, ExtractError> {
    task.await
        .map_err(|e| ExtractError::ExecutionError(format!("{} task failed: {}", stream, e)))?
        .map_err(|e| ExtractError::ExecutionError(format!("Failed to read {}: {}", stream, e)))
}

/// Probe a command by running it and checking the exit status
pub async fn command_succeeds(program: &str, args: &[&str]) -> bool {
    let probe = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status();

    matches!(
        timeout(Duration::from_secs(10), probe).await,
        Ok(Ok(status)) if status.success()
    )
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout() {
        let output = run_output_with_timeout("sh", vec!["-c".into(), "echo hello".into()], 5)
            .await
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[tokio::test]
    async fn kills_on_timeout() {
        let err = run_output_with_timeout("sh", vec!["-c".into(), "sleep 5".into()], 1)
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::NetworkTimeout));
    }

    #[tokio::test]
    async fn missing_program_is_tool_not_found() {
        let err = run_output_with_timeout("definitely-not-a-real-binary-xyz", vec![], 1)
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::ToolNotFound(_)));
    }

    #[tokio::test]
    async fn probes_commands() {
        assert!(command_succeeds("sh", &["-c", "exit 0"]).await);
        assert!(!command_succeeds("sh", &["-c", "exit 3"]).await);
    }
}
