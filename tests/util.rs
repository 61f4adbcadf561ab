#![allow(dead_code)]
use mesh_shear::prelude::*;

pub fn rec(word: &str) -> Record {
    Record::try_from_word(word).unwrap()
}

pub fn recs(words: &[&str]) -> Vec<Record> {
    words.iter().map(|w| rec(w)).collect()
}

/// Runs one line of `values.len()` workers through the full exchange
/// sequence, one thread per position, and returns the line afterwards.
pub fn sort_line(values: &[Record], direction: Direction) -> Vec<Record> {
    let size = values.len();
    let comms = ThreadComm::fleet(size);
    std::thread::scope(|scope| {
        let handles: Vec<_> = comms
            .into_iter()
            .zip(values.iter().copied())
            .enumerate()
            .map(|(position, (comm, mut value))| {
                scope.spawn(move || {
                    let backward = position.checked_sub(1);
                    let forward = (position + 1 < size).then_some(position + 1);
                    let sorter = LineSorter::new(
                        &comm,
                        CommTag::phase(0),
                        position,
                        size,
                        backward,
                        forward,
                    )
                    .unwrap();
                    sorter.sort(&mut value, direction).unwrap();
                    value
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

/// Asserts `got` holds exactly the records of `want`, in any order.
pub fn assert_permutation(got: &[Record], want: &[Record]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={got:?}\nwant={want:?}");
}

/// Asserts the row-major grid reads fully ascending along the snake path.
pub fn assert_snake_sorted(records: &[Record]) {
    let mesh = Mesh::new(records.len()).unwrap();
    let snake = snake_reading(records, &mesh);
    assert!(
        snake.windows(2).all(|w| w[0] <= w[1]),
        "snake reading not ascending: {snake:?}"
    );
}
