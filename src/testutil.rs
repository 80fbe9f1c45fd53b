use crate::RunVec;

/// Builds a vector of nominal size `len` from `(offset, values)` pairs.
pub fn mkvec(len: usize, runs: &[(usize, &[i32])]) -> RunVec<i32> {
    let mut vec = RunVec::with_len(len);
    for (offset, data) in runs {
        vec.add_range(*offset, data);
    }
    assert!(vec.is_valid());
    vec
}

/// Dense readback of the full logical sequence, void as zeros.
pub fn dense(vec: &RunVec<i32>) -> Vec<i32> {
    vec.iter().collect()
}

/// The `(offset, values)` pairs of every run, for structural assertions.
pub fn layout(vec: &RunVec<i32>) -> Vec<(usize, Vec<i32>)> {
    vec.runs()
        .iter()
        .map(|run| (run.offset(), run.values().to_vec()))
        .collect()
}
