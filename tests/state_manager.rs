use swipe_deck::direction::SwipeDirection;
use swipe_deck::stack::CardStackStateManager;

/// Small deterministic generator so the operation sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

fn assert_partition(manager: &CardStackStateManager) {
    let mut all: Vec<usize> = manager.remaining_indices().to_vec();
    all.extend(manager.swipes().iter().map(|swipe| swipe.index));
    all.sort_unstable();
    let expected: Vec<usize> = (0..manager.total_index_count()).collect();
    assert_eq!(all, expected, "state: {:?}", manager);
}

#[test]
fn test_random_operations_keep_indices_partitioned() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut manager = CardStackStateManager::new();
        manager.reset(rng.next(8));

        for _ in 0..200 {
            match rng.next(6) {
                0 => {
                    let index = rng.next(manager.total_index_count() + 1);
                    let position = rng.next(manager.remaining_indices().len() + 1);
                    manager.insert(index, position);
                }
                1 if manager.total_index_count() > 0 => {
                    manager.delete(rng.next(manager.total_index_count()));
                }
                2 if !manager.remaining_indices().is_empty() => {
                    let position = rng.next(manager.remaining_indices().len());
                    manager.delete_at_position(position);
                }
                3 => manager.swipe(SwipeDirection::ALL[rng.next(4)]),
                4 => {
                    manager.undo_swipe();
                }
                _ => {
                    let len = manager.remaining_indices().len() as isize;
                    let distance = rng.next(2 * len as usize + 1) as isize - len;
                    manager.shift(distance);
                }
            }
            assert_partition(&manager);
        }
    }
}

#[test]
fn test_swipe_undo_restores_order_after_edits() {
    let mut manager = CardStackStateManager::new();
    manager.reset(4);
    manager.shift(1);
    manager.swipe(SwipeDirection::Left);
    manager.insert(0, 2);
    manager.delete(3);

    let before = manager.remaining_indices().to_vec();
    manager.swipe(SwipeDirection::Down);
    let undone = manager.undo_swipe().unwrap();
    assert_eq!(undone.index, before[0]);
    assert_eq!(undone.direction, SwipeDirection::Down);
    assert_eq!(manager.remaining_indices(), before.as_slice());
}
