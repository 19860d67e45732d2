use crate::PseudoRandomNumberGenerator;

const FLOAT_SCALE: f64 = 4294967296.0;

/// Returns a random integer in `[0, bound)`.
///
/// Bounds of 0 and 1 have a single outcome and do not advance the generator.
pub fn rand_int(prng: &mut dyn PseudoRandomNumberGenerator, bound: u64) -> u64 {
    if bound <= 1 {
        return 0;
    }
    prng.next() % bound
}

/// Returns a random float in `[0, 1)`.
pub fn rand_float(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    prng.next() as f64 / FLOAT_SCALE
}

/// Returns whether an event with probability `numerator / denominator` occurs.
pub fn chance(prng: &mut dyn PseudoRandomNumberGenerator, numerator: u64, denominator: u64) -> bool {
    rand_int(prng, denominator) < numerator
}

/// Returns a random index into a collection of the given length.
pub fn sample_index(prng: &mut dyn PseudoRandomNumberGenerator, len: usize) -> Option<usize> {
    match len {
        0 => None,
        _ => Some(rand_int(prng, len as u64) as usize),
    }
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    sample_index(prng, slice.len()).and_then(|index| slice.get(index))
}

#[cfg(test)]
mod rand_util_test {
    use pretty_assertions::assert_eq;

    use crate::{
        PseudoRandomNumberGenerator,
        SeededRandomNumberGenerator,
        rand_util,
    };

    #[test]
    fn rolls_ten_sided_die() {
        let mut prng = SeededRandomNumberGenerator::new(Some(100));
        let got = (0..12)
            .map(|_| rand_util::rand_int(&mut prng, 10))
            .collect::<Vec<_>>();
        assert_eq!(got, vec![6, 6, 9, 5, 4, 3, 7, 3, 0, 9, 0, 3]);
    }

    #[test]
    fn trivial_bounds_do_not_advance() {
        let mut prng = SeededRandomNumberGenerator::new(Some(100));
        assert_eq!(rand_util::rand_int(&mut prng, 0), 0);
        assert_eq!(rand_util::rand_int(&mut prng, 1), 0);
        assert_eq!(prng.next(), 1989571486);
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut prng = SeededRandomNumberGenerator::new(Some(100));
        let first = rand_util::rand_float(&mut prng);
        assert!((first - 0.46323320968076587).abs() < 1e-12);
        for _ in 0..100 {
            let value = rand_util::rand_float(&mut prng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn chance_matches_die_rolls() {
        let mut prng = SeededRandomNumberGenerator::new(Some(100));
        let got = (0..6)
            .map(|_| rand_util::chance(&mut prng, 6, 10))
            .collect::<Vec<_>>();
        assert_eq!(got, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn samples_from_slice() {
        let mut prng = SeededRandomNumberGenerator::new(Some(12345));
        let items = ["a", "b", "c", "d", "e", "f"];
        let got = (0..4)
            .map(|_| *rand_util::sample_slice(&mut prng, &items).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(got, vec!["a", "c", "f", "a"]);
        let empty: [u8; 0] = [];
        assert_eq!(rand_util::sample_slice(&mut prng, &empty), None);
    }
}
