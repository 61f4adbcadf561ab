//! Odd-even transposition sort of one mesh line.
//!
//! A line of `size` workers is fully sorted by exactly `size` passes of the
//! brick-wall compare-exchange network. Each pass pairs a *talker* with the
//! *listener* ahead of it: the talker sends its record forward and adopts
//! whatever comes back, unconditionally; the listener compares, keeps the
//! record that belongs at its own (higher) position under the requested
//! direction, and returns the other. Every pass preserves the multiset of
//! records across the line.

use crate::algs::communicator::{CommTag, Communicator, Wait};
use crate::mesh_error::MeshShearError;
use crate::record::{Record, MAX_WORD_LEN};

/// Sort direction of one line, fixed for its entire pass sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Whether a listener holding `own` must swap with the `incoming` record
    /// of its backward neighbor. Ascending lines push larger records toward
    /// higher positions; descending lines mirror that.
    #[inline]
    pub fn should_swap(self, incoming: &Record, own: &Record) -> bool {
        match self {
            Direction::Ascending => incoming > own,
            Direction::Descending => own > incoming,
        }
    }

    /// True when `records` is ordered according to this direction.
    pub fn is_sorted(self, records: &[Record]) -> bool {
        records.windows(2).all(|w| match self {
            Direction::Ascending => w[0] <= w[1],
            Direction::Descending => w[0] >= w[1],
        })
    }
}

/// One worker's view of the line it currently sorts along.
///
/// `position` is the worker's index within the line, `backward`/`forward`
/// the comm ranks of the adjacent line members (absent at the line's ends).
pub struct LineSorter<'a, C: Communicator> {
    comm: &'a C,
    tag: CommTag,
    position: usize,
    size: usize,
    backward: Option<usize>,
    forward: Option<usize>,
}

impl<'a, C: Communicator> LineSorter<'a, C> {
    /// Validates that the neighbor set matches the line position: every
    /// non-terminal position needs its forward neighbor, every non-zero
    /// position its backward one.
    pub fn new(
        comm: &'a C,
        tag: CommTag,
        position: usize,
        size: usize,
        backward: Option<usize>,
        forward: Option<usize>,
    ) -> Result<Self, MeshShearError> {
        if position + 1 < size && forward.is_none() {
            return Err(MeshShearError::MissingNeighbor {
                position,
                size,
                side: "forward",
            });
        }
        if position > 0 && backward.is_none() {
            return Err(MeshShearError::MissingNeighbor {
                position,
                size,
                side: "backward",
            });
        }
        Ok(LineSorter {
            comm,
            tag,
            position,
            size,
            backward,
            forward,
        })
    }

    /// Runs the full `size`-pass exchange sequence, leaving `value` holding
    /// the record that belongs at this worker's line position.
    pub fn sort(&self, value: &mut Record, direction: Direction) -> Result<(), MeshShearError> {
        for pass in 0..self.size {
            self.exchange(pass, value, direction)?;
        }
        Ok(())
    }

    /// One pass of the brick-wall pairing.
    fn exchange(
        &self,
        pass: usize,
        value: &mut Record,
        direction: Direction,
    ) -> Result<(), MeshShearError> {
        let talks = pass % 2 == self.position % 2 && self.position + 1 < self.size;
        let listens = pass % 2 != self.position % 2 && self.position > 0;

        if talks {
            // forward neighbor resolves the pair; adopt its reply as-is
            let peer = self.forward.ok_or(MeshShearError::MissingNeighbor {
                position: self.position,
                size: self.size,
                side: "forward",
            })?;
            let reply = self.comm.irecv(peer, self.tag, MAX_WORD_LEN);
            self.comm.isend(peer, self.tag, value.as_bytes()).wait();
            let raw = reply
                .wait()
                .ok_or_else(|| MeshShearError::comm(peer, "resolved record never arrived"))?;
            *value = Record::from_wire(&raw)
                .map_err(|msg| MeshShearError::comm(peer, msg))?;
        } else if listens {
            let peer = self.backward.ok_or(MeshShearError::MissingNeighbor {
                position: self.position,
                size: self.size,
                side: "backward",
            })?;
            let raw = self
                .comm
                .irecv(peer, self.tag, MAX_WORD_LEN)
                .wait()
                .ok_or_else(|| MeshShearError::comm(peer, "talker record never arrived"))?;
            let incoming =
                Record::from_wire(&raw).map_err(|msg| MeshShearError::comm(peer, msg))?;
            if direction.should_swap(&incoming, value) {
                self.comm.isend(peer, self.tag, value.as_bytes()).wait();
                *value = incoming;
            } else {
                self.comm.isend(peer, self.tag, incoming.as_bytes()).wait();
            }
        }
        // idle positions retain their value and fall through to the next pass
        Ok(())
    }
}
