//! CLI front end: read a word file, sort it on the virtual mesh, print the
//! unsorted and snake-sorted matrices.
//!
//! Usage: `mesh-shear <words-file> [workers]`
//!
//! `workers` defaults to the record count; passing any other value fails the
//! run, mirroring the one-worker-one-record contract.

use mesh_shear::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mesh-shear: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), MeshShearError> {
    let mut args = std::env::args().skip(1);
    let path: PathBuf = args
        .next()
        .ok_or_else(|| MeshShearError::InvalidInput("usage: mesh-shear <words-file> [workers]".into()))?
        .into();
    let workers = args
        .next()
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| MeshShearError::InvalidInput(format!("`{raw}` is not a worker count")))
        })
        .transpose()?;

    let words = read_words(&path)?;
    validate_worker_count(workers.unwrap_or(words.len()), words.len())?;
    let mesh = Mesh::new(words.len())?;

    println!("////////////////////////  UNSORTED  ///////////////////////\n");
    print!("{}", format_matrix(&words, mesh.side()));

    let sorted = shear_sort(&words)?;

    println!("\n////////////////////////  SORTED  /////////////////////////\n");
    print!("{}", format_matrix(&sorted, mesh.side()));
    Ok(())
}
