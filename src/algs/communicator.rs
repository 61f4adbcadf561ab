//! Thin façade over the point-to-point messaging that carries exchanges.
//!
//! Messages are contiguous byte slices. Sends are buffered and complete
//! immediately; receive handles are waitable — the exchange protocol calls
//! `.wait()` before it trusts a reply. The façade also owns the two pieces
//! of run-wide coordination the scheduler needs: a phase barrier and a
//! global abort flag. Any transport that honors this contract can carry the
//! exchange protocol; [`ThreadComm`] is the in-process realization.

use crate::mesh_error::MeshShearError;
use bytes::Bytes;
use dashmap::DashMap;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Typed message tag. One tag per phase keeps traffic of adjacent phases
/// from mixing in the mailbox.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommTag(u16);

impl CommTag {
    #[inline]
    pub const fn new(raw: u16) -> Self {
        CommTag(raw)
    }

    /// Tag reserved for the exchanges of one scheduler phase.
    #[inline]
    pub const fn phase(index: usize) -> Self {
        CommTag(index as u16)
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

/// Anything that can be waited on.
pub trait Wait {
    /// Waits for completion and returns the received data (if any).
    fn wait(self) -> Option<Vec<u8>>;
}

impl Wait for () {
    fn wait(self) -> Option<Vec<u8>> {
        None
    }
}

/// Point-to-point messaging plus run-wide phase coordination.
pub trait Communicator: Send + Sync {
    /// Handle returned by `isend`.
    type SendHandle: Wait;
    /// Handle returned by `irecv`.
    type RecvHandle: Wait;

    /// Posts a buffered send of `buf` to `peer`.
    fn isend(&self, peer: usize, tag: CommTag, buf: &[u8]) -> Self::SendHandle;
    /// Posts a receive of exactly `len` bytes from `peer`.
    fn irecv(&self, peer: usize, tag: CommTag, len: usize) -> Self::RecvHandle;

    /// This worker's rank.
    fn rank(&self) -> usize;
    /// Total number of workers.
    fn size(&self) -> usize;

    /// Blocks until every worker reached the barrier, or the run aborted.
    fn barrier(&self) -> Result<(), MeshShearError>;
    /// Flags the whole run as failed, waking anyone blocked on the barrier
    /// or on a receive.
    fn abort(&self);
}

/// Compile-time no-op comm for single-worker lines and serial unit tests.
#[derive(Clone, Debug, Default)]
pub struct NoComm;

impl Communicator for NoComm {
    type SendHandle = ();
    type RecvHandle = ();

    fn isend(&self, _peer: usize, _tag: CommTag, _buf: &[u8]) {}
    fn irecv(&self, _peer: usize, _tag: CommTag, _len: usize) {}

    fn rank(&self) -> usize {
        0
    }
    fn size(&self) -> usize {
        1
    }

    fn barrier(&self) -> Result<(), MeshShearError> {
        Ok(())
    }
    fn abort(&self) {}
}

// --- ThreadComm: one comm handle per worker thread, shared run state ---

type Key = (usize, usize, u16); // (src, dst, tag)

/// How long a receive may go unanswered before the run is declared failed.
const RECV_DEADLINE: Duration = Duration::from_secs(10);

struct BarrierState {
    arrived: usize,
    generation: u64,
}

/// State shared by every [`ThreadComm`] of one sort run.
struct CommShared {
    parties: usize,
    mailbox: DashMap<Key, VecDeque<Bytes>>,
    barrier: Mutex<BarrierState>,
    barrier_cv: Condvar,
    aborted: AtomicBool,
}

impl CommShared {
    fn new(parties: usize) -> Arc<Self> {
        Arc::new(CommShared {
            parties,
            mailbox: DashMap::new(),
            barrier: Mutex::new(BarrierState {
                arrived: 0,
                generation: 0,
            }),
            barrier_cv: Condvar::new(),
            aborted: AtomicBool::new(false),
        })
    }

    fn abort(&self) {
        if !self.aborted.swap(true, Ordering::SeqCst) {
            log::warn!("sort run aborted; waking barrier waiters");
        }
        // waiters re-check the flag on wake
        let _guard = self.barrier.lock();
        self.barrier_cv.notify_all();
    }

    fn wait_barrier(&self) -> Result<(), MeshShearError> {
        if self.aborted.load(Ordering::SeqCst) {
            return Err(MeshShearError::Aborted);
        }
        let mut state = self.barrier.lock();
        let generation = state.generation;
        state.arrived += 1;
        if state.arrived == self.parties {
            state.arrived = 0;
            state.generation += 1;
            self.barrier_cv.notify_all();
            return Ok(());
        }
        while state.generation == generation {
            if self.aborted.load(Ordering::SeqCst) {
                return Err(MeshShearError::Aborted);
            }
            self.barrier_cv.wait(&mut state);
        }
        if self.aborted.load(Ordering::SeqCst) {
            return Err(MeshShearError::Aborted);
        }
        Ok(())
    }
}

/// In-process transport: one handle per worker thread, all handles of a run
/// sharing a mailbox, a phase barrier, and an abort flag.
#[derive(Clone)]
pub struct ThreadComm {
    rank: usize,
    shared: Arc<CommShared>,
}

impl ThreadComm {
    /// Builds the comm handles for a run of `parties` workers, rank `i` at
    /// index `i`.
    pub fn fleet(parties: usize) -> Vec<ThreadComm> {
        let shared = CommShared::new(parties);
        (0..parties)
            .map(|rank| ThreadComm {
                rank,
                shared: Arc::clone(&shared),
            })
            .collect()
    }
}

/// Waitable receive over the shared mailbox. Polls in `wait()`; gives up
/// once the deadline passes or the run aborts.
pub struct MailboxRecv {
    shared: Arc<CommShared>,
    key: Key,
    len: usize,
}

impl Wait for MailboxRecv {
    fn wait(self) -> Option<Vec<u8>> {
        let deadline = Instant::now() + RECV_DEADLINE;
        loop {
            if let Some(mut queue) = self.shared.mailbox.get_mut(&self.key) {
                if let Some(msg) = queue.pop_front() {
                    if msg.len() != self.len {
                        log::warn!(
                            "message from worker {} has {} bytes, expected {}",
                            self.key.0,
                            msg.len(),
                            self.len
                        );
                    }
                    // caller validates the payload length again when decoding
                    return Some(msg.to_vec());
                }
            }
            if self.shared.aborted.load(Ordering::SeqCst) {
                return None;
            }
            if Instant::now() >= deadline {
                log::error!(
                    "receive from worker {} (tag {}) timed out",
                    self.key.0,
                    self.key.2
                );
                return None;
            }
            std::thread::yield_now();
        }
    }
}

impl Communicator for ThreadComm {
    type SendHandle = ();
    type RecvHandle = MailboxRecv;

    fn isend(&self, peer: usize, tag: CommTag, buf: &[u8]) {
        let key = (self.rank, peer, tag.as_u16());
        self.shared
            .mailbox
            .entry(key)
            .or_default()
            .push_back(Bytes::copy_from_slice(buf));
    }

    fn irecv(&self, peer: usize, tag: CommTag, len: usize) -> MailboxRecv {
        MailboxRecv {
            shared: Arc::clone(&self.shared),
            key: (peer, self.rank, tag.as_u16()),
            len,
        }
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.shared.parties
    }

    fn barrier(&self) -> Result<(), MeshShearError> {
        self.shared.wait_barrier()
    }

    fn abort(&self) {
        self.shared.abort();
    }
}
