//! Bounded subprocess execution
//!
//! Spawns a command with piped output, polls it against a deadline and an
//! interrupt flag, and kills it when either trips.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::ports::{InvocationError, RunOutput};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run `cmd` to completion, or until `timeout` elapses or `interrupted` is set.
///
/// Stdout and stderr are captured and concatenated (stdout first). The
/// deadline also bounds draining the pipes after the child exits, so a
/// grandchild that keeps them open cannot hold the entry past its timeout.
/// On timeout or interrupt the child is killed and reaped, the readers are
/// detached and output collected so far is discarded. A timeout too large to
/// represent means no deadline.
pub fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    interrupted: &AtomicBool,
) -> Result<RunOutput, InvocationError> {
    let program = cmd.get_program().to_string_lossy().into_owned();

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| InvocationError::Spawn {
            program: program.clone(),
            source,
        })?;

    let deadline = Instant::now().checked_add(timeout);
    let (tx, rx) = mpsc::channel();
    let readers = usize::from(spawn_reader(child.stdout.take(), Pipe::Stdout, &tx))
        + usize::from(spawn_reader(child.stderr.take(), Pipe::Stderr, &tx));
    drop(tx);

    let status = loop {
        if let Some(status) = child.try_wait().map_err(InvocationError::Wait)? {
            break status;
        }
        if interrupted.load(Ordering::SeqCst) {
            tracing::info!(%program, "killing process after interrupt");
            kill(&mut child)?;
            return Ok(RunOutput::after_interrupt());
        }
        let Some(wait) = remaining(deadline) else {
            tracing::warn!(%program, timeout_secs = timeout.as_secs_f64(), "process timed out, killing");
            kill(&mut child)?;
            return Ok(RunOutput::after_timeout());
        };
        thread::sleep(POLL_INTERVAL.min(wait));
    };

    // A terminal Ctrl+C reaches the child too; its failure is not a compile result.
    if !status.success() && interrupted.load(Ordering::SeqCst) {
        return Ok(RunOutput::after_interrupt());
    }

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let mut pending = readers;
    while pending > 0 {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(RunOutput::after_interrupt());
        }
        let Some(wait) = remaining(deadline) else {
            tracing::warn!(%program, "output pipes still open at deadline, abandoning them");
            return Ok(RunOutput::after_timeout());
        };
        match rx.recv_timeout(POLL_INTERVAL.min(wait)) {
            Ok((Pipe::Stdout, bytes)) => stdout = bytes,
            Ok((Pipe::Stderr, bytes)) => stderr = bytes,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
        pending -= 1;
    }

    let mut output = String::from_utf8_lossy(&stdout).into_owned();
    output.push_str(&String::from_utf8_lossy(&stderr));
    Ok(RunOutput {
        exit_code: status.code(),
        output,
        timed_out: false,
        interrupted: false,
    })
}

#[derive(Debug, Clone, Copy)]
enum Pipe {
    Stdout,
    Stderr,
}

/// Time left before `deadline`; `None` once it has passed. No deadline never runs out.
fn remaining(deadline: Option<Instant>) -> Option<Duration> {
    match deadline {
        Some(deadline) => deadline
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero()),
        None => Some(POLL_INTERVAL),
    }
}

/// Read `pipe` to the end on its own thread and send the bytes back tagged.
fn spawn_reader<R: Read + Send + 'static>(
    pipe: Option<R>,
    which: Pipe,
    tx: &mpsc::Sender<(Pipe, Vec<u8>)>,
) -> bool {
    let Some(mut pipe) = pipe else {
        return false;
    };
    let tx = tx.clone();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        // The receiver is gone when the run was abandoned.
        let _ = tx.send((which, buf));
    });
    true
}

fn kill(child: &mut Child) -> Result<(), InvocationError> {
    // The child may exit on its own between try_wait and kill.
    let _ = child.kill();
    child.wait().map_err(InvocationError::Wait)?;
    Ok(())
}
