pub fn create_bincode_config() -> bincode::config::Configuration<bincode::config::BigEndian> {
    bincode::config::standard()
        .with_big_endian()
        .with_variable_int_encoding()
}

pub mod test {
    use rand::prelude::*;

    pub fn create_test_bytes(seed: u64) -> impl Iterator<Item = Vec<u8>> {
        let mut rng = StdRng::seed_from_u64(seed);

        std::iter::repeat_with(move || {
            let len = rng.random_range(0..10);
            let mut bytes = Vec::with_capacity(len);
            for _ in 0..len {
                bytes.push(rng.random_range(0..3) as u8);
            }
            bytes
        })
    }

    /// A sequence of `len` random bytes and a copy mutated by `edits`
    /// replacements, insertions, and removals, so the pair's edit distance
    /// stays near `edits` instead of growing with `len`.
    pub fn create_related_bytes(seed: u64, len: usize, edits: usize) -> (Vec<u8>, Vec<u8>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let original: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let mut revised = original.clone();
        for _ in 0..edits {
            if revised.is_empty() {
                revised.push(rng.random());
                continue;
            }
            let at = rng.random_range(0..revised.len());
            match rng.random_range(0..3) {
                0 => revised[at] = rng.random(),
                1 => revised.insert(at, rng.random()),
                _ => {
                    revised.remove(at);
                }
            }
        }
        (original, revised)
    }
}
