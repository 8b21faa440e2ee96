use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

/// Random test data for dictionary keys and values.
pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

// keep integer keys in a small range so that duplicates actually happen
const RANDOM_INT_MAX: i32 = 1 << 12;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

impl Random for i32 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen_range(-RANDOM_INT_MAX..RANDOM_INT_MAX)
    }
}

impl<T: Random> Random for Option<T> {
    // never None: the absent key is exercised explicitly by the tests
    fn gen(rng: &mut ThreadRng) -> Self {
        Some(T::gen(rng))
    }
}
