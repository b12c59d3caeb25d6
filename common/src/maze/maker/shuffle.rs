use rand::Rng;

/// Fisher-Yates: walks a counter down from the end of the slice, drawing one
/// index from `0..counter` for each position and swapping it into place.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let mut counter = items.len();

    while counter > 0 {
        let index = rng.random_range(0..counter);
        counter -= 1;
        items.swap(counter, index);
    }
}
