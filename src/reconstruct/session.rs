//! Background reconstruction with supersession
//!
//! An interactive caller runs composition off its input-handling thread and
//! only ever applies the newest result. Each `submit` stamps the job with a
//! generation; results carrying a stale generation are drained and
//! discarded, so a superseded job can finish without its canvas ever
//! reaching the caller. Jobs are not interruptible mid-placement; they
//! complete or fail atomically and report through one channel.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::io::error::Result;
use crate::reconstruct::canvas::{Composition, compose};
use crate::reconstruct::matrix::RawMatrix;
use crate::scan::params::ReconstructionParams;

type SessionMessage = (u64, Result<Composition>);

/// One logical reconstruction session with at most one live job
#[derive(Debug)]
pub struct ReconstructionSession {
    sender: Sender<SessionMessage>,
    receiver: Receiver<SessionMessage>,
    latest: u64,
    pending: usize,
}

impl Default for ReconstructionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconstructionSession {
    /// Create an idle session
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            latest: 0,
            pending: 0,
        }
    }

    /// Submit a composition job, superseding any job still in flight
    ///
    /// The job runs on its own worker thread and owns its matrix and
    /// parameters; concurrent jobs share no mutable state.
    pub fn submit(&mut self, matrix: RawMatrix, params: ReconstructionParams) {
        self.latest += 1;
        self.pending += 1;
        let generation = self.latest;
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = compose(&matrix, &params);
            // The session may have been dropped; the result dies with it.
            let _ = sender.send((generation, result));
        });
    }

    /// Collect the newest finished result without blocking
    ///
    /// Drains everything already delivered, discarding results from
    /// superseded jobs. Returns `None` when the newest job has not
    /// finished yet.
    pub fn try_latest(&mut self) -> Option<Result<Composition>> {
        let mut newest = None;
        while let Ok((generation, result)) = self.receiver.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            if generation == self.latest {
                newest = Some(result);
            }
        }
        newest
    }

    /// Block until the newest submitted job reports its result
    ///
    /// Stale results from superseded jobs are discarded along the way.
    /// Returns `None` when no job is pending.
    pub fn wait_latest(&mut self) -> Option<Result<Composition>> {
        while self.pending > 0 {
            let Ok((generation, result)) = self.receiver.recv() else {
                return None;
            };
            self.pending = self.pending.saturating_sub(1);
            if generation == self.latest {
                return Some(result);
            }
        }
        None
    }

    /// Whether a submitted job has not yet been collected
    pub const fn is_pending(&self) -> bool {
        self.pending > 0
    }
}
