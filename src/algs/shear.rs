//! Shear sort scheduling: alternating row/column phases over the mesh.
//!
//! Even-indexed phases sort every row — ascending for even row indices,
//! descending for odd ones, which is what produces the snake layout. Odd
//! phases sort every column ascending. After `2·⌊log₂ side⌋ + 1` phases the
//! grid reads fully ascending along the boustrophedon path. Lines of one
//! phase never share workers, so the only cross-line coordination is the
//! barrier between phases.

use crate::algs::communicator::{CommTag, Communicator, ThreadComm};
use crate::algs::line_sort::{Direction, LineSorter};
use crate::mesh_error::MeshShearError;
use crate::record::Record;
use crate::topology::{Axis, Mesh, NodeId, Shift};

/// The line assignment of one worker in one phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhasePlan {
    pub axis: Axis,
    pub direction: Direction,
    /// The worker's index within its line.
    pub position: usize,
}

impl PhasePlan {
    /// Derives the phase schedule for the worker at `(row, col)`.
    pub fn for_phase(index: usize, row: usize, col: usize) -> Self {
        if index % 2 == 0 {
            PhasePlan {
                axis: Axis::Row,
                direction: if row % 2 == 0 {
                    Direction::Ascending
                } else {
                    Direction::Descending
                },
                position: col,
            }
        } else {
            PhasePlan {
                axis: Axis::Col,
                direction: Direction::Ascending,
                position: row,
            }
        }
    }
}

/// §6 contract of the original system: one worker owns exactly one record.
pub fn validate_worker_count(workers: usize, records: usize) -> Result<(), MeshShearError> {
    if workers != records {
        return Err(MeshShearError::WorkerCountMismatch { workers, records });
    }
    Ok(())
}

/// One worker's whole run: a line sort per phase, a barrier between phases.
///
/// Any failure aborts the entire run before the error is returned, so peers
/// blocked on exchanges or on the barrier fail promptly instead of hanging.
pub fn run_node<C: Communicator>(
    mut value: Record,
    mesh: &Mesh,
    node: NodeId,
    comm: &C,
) -> Result<Record, MeshShearError> {
    let result = drive_phases(&mut value, mesh, node, comm);
    match result {
        Ok(()) => Ok(value),
        Err(err) => {
            comm.abort();
            Err(err)
        }
    }
}

fn drive_phases<C: Communicator>(
    value: &mut Record,
    mesh: &Mesh,
    node: NodeId,
    comm: &C,
) -> Result<(), MeshShearError> {
    let (row, col) = mesh.coords_of(node);
    for phase in 0..mesh.phase_count() {
        let plan = PhasePlan::for_phase(phase, row, col);
        if node.rank() == 0 {
            log::debug!(
                "phase {phase}: sorting {:?} lines of length {}",
                plan.axis,
                mesh.side()
            );
        }
        let backward = mesh
            .neighbor_along(plan.axis, node, Shift::Backward)
            .map(NodeId::rank);
        let forward = mesh
            .neighbor_along(plan.axis, node, Shift::Forward)
            .map(NodeId::rank);
        let sorter = LineSorter::new(
            comm,
            CommTag::phase(phase),
            plan.position,
            mesh.side(),
            backward,
            forward,
        )?;
        sorter.sort(value, plan.direction)?;
        // the next phase flips the axis, so its neighbor roles are only
        // valid once every line of this phase has finished
        comm.barrier()?;
    }
    Ok(())
}

/// Sorts `records` into snake order on a virtual mesh, one worker thread per
/// record, and returns the final records in row-major mesh order.
pub fn shear_sort(records: &[Record]) -> Result<Vec<Record>, MeshShearError> {
    let mesh = Mesh::new(records.len())?;
    log::debug!(
        "shear sort: {} records on a {}×{} mesh, {} phases",
        records.len(),
        mesh.side(),
        mesh.side(),
        mesh.phase_count()
    );
    let comms = ThreadComm::fleet(records.len());

    std::thread::scope(|scope| {
        let handles: Vec<_> = comms
            .into_iter()
            .zip(records.iter().copied())
            .enumerate()
            .map(|(rank, (comm, record))| {
                let mesh = &mesh;
                scope.spawn(move || run_node(record, mesh, NodeId::from(rank), &comm))
            })
            .collect();

        let mut sorted = Vec::new();
        sorted
            .try_reserve_exact(records.len())
            .map_err(|_| MeshShearError::Allocation(records.len() * std::mem::size_of::<Record>()))?;
        let mut first_err = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(record)) => sorted.push(record),
                Ok(Err(err)) => {
                    // prefer the root cause over the Aborted echoes it causes
                    if first_err.is_none() || matches!(first_err, Some(MeshShearError::Aborted)) {
                        first_err = Some(err);
                    }
                }
                Err(_) => {
                    if first_err.is_none() {
                        first_err = Some(MeshShearError::Aborted);
                    }
                }
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(sorted),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_phases_sort_rows_boustrophedon() {
        let even_row = PhasePlan::for_phase(0, 0, 3);
        assert_eq!(even_row.axis, Axis::Row);
        assert_eq!(even_row.direction, Direction::Ascending);
        assert_eq!(even_row.position, 3);

        let odd_row = PhasePlan::for_phase(2, 1, 0);
        assert_eq!(odd_row.axis, Axis::Row);
        assert_eq!(odd_row.direction, Direction::Descending);
    }

    #[test]
    fn odd_phases_sort_columns_ascending() {
        for row in 0..4 {
            let plan = PhasePlan::for_phase(1, row, 2);
            assert_eq!(plan.axis, Axis::Col);
            assert_eq!(plan.direction, Direction::Ascending);
            assert_eq!(plan.position, row);
        }
    }

    #[test]
    fn worker_count_must_match() {
        assert!(validate_worker_count(9, 9).is_ok());
        assert!(matches!(
            validate_worker_count(8, 9),
            Err(MeshShearError::WorkerCountMismatch {
                workers: 8,
                records: 9
            })
        ));
    }

    #[test]
    fn non_square_input_is_rejected_up_front() {
        let records: Vec<Record> = ["a", "b", "c"]
            .iter()
            .map(|w| Record::try_from_word(w).unwrap())
            .collect();
        assert!(matches!(
            shear_sort(&records),
            Err(MeshShearError::NotPerfectSquare(3))
        ));
    }

    #[test]
    fn single_record_sorts_trivially() {
        let records = vec![Record::try_from_word("only").unwrap()];
        let sorted = shear_sort(&records).unwrap();
        assert_eq!(sorted, records);
    }
}
