//! Growth policy shared by the array backed containers.

/// Capacity of the first backing store, allocated on the first insertion.
pub(crate) const INITIAL_CAPACITY: usize = 4;

/// The capacity a full backing store of `capacity` slots grows to: double, but at least
/// [`INITIAL_CAPACITY`].
pub(crate) const fn grown_capacity(capacity: usize) -> usize {
    let doubled = capacity.saturating_mul(2);
    if doubled < INITIAL_CAPACITY {
        INITIAL_CAPACITY
    } else {
        doubled
    }
}

/// A backing store of `capacity` unoccupied slots.
pub(crate) fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_four_then_doubles() {
        assert_eq!(grown_capacity(0), 4);
        assert_eq!(grown_capacity(1), 4);
        assert_eq!(grown_capacity(4), 8);
        assert_eq!(grown_capacity(8), 16);
    }

    #[test]
    fn slots_start_empty() {
        let slots = empty_slots::<String>(3);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(Option::is_none));
    }
}
