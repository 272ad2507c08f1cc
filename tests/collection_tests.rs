//! Tests for RedBlackTreeMap driven through the Collection trait.

use rbmap::{Collection, RedBlackTreeMap};
use rstest::{fixture, rstest};

// =============================================================================
// Generic Helpers
// =============================================================================

fn fill<C: Collection<i32, String>>(collection: &mut C, keys: &[i32]) {
    for key in keys {
        collection.insert(*key, format!("v{key}"));
    }
}

fn drain<C: Collection<i32, String>>(collection: &mut C, keys: &[i32]) -> usize {
    keys.iter().filter(|key| collection.remove(key)).count()
}

fn sorted_range<C: Collection<i32, String>>(collection: &C, low: i32, high: i32) -> Vec<i32> {
    let mut keys: Vec<i32> = collection.find_range(&low, &high).into_iter().copied().collect();
    keys.sort_unstable();
    keys
}

#[fixture]
fn populated() -> RedBlackTreeMap<i32, String> {
    let mut map = RedBlackTreeMap::new();
    fill(&mut map, &[50, 20, 80, 10, 30, 70, 90, 60]);
    map
}

// =============================================================================
// Contract Tests
// =============================================================================

#[rstest]
fn test_empty_collection() {
    let map: RedBlackTreeMap<i32, String> = RedBlackTreeMap::new();

    assert!(Collection::is_empty(&map));
    assert_eq!(Collection::size(&map), 0);
    assert_eq!(Collection::height(&map), 0);
    assert!(Collection::keys(&map).is_empty());
    assert_eq!(Collection::find(&map, &1), None);
}

#[rstest]
fn test_fill_through_trait(populated: RedBlackTreeMap<i32, String>) {
    assert_eq!(Collection::size(&populated), 8);
    assert_eq!(
        Collection::keys(&populated),
        vec![&10, &20, &30, &50, &60, &70, &80, &90]
    );
    assert_eq!(Collection::sort(&populated), Collection::keys(&populated));
    assert_eq!(Collection::find(&populated, &70), Some(&"v70".to_string()));
    assert!(populated.validate().is_ok());
}

#[rstest]
fn test_insert_duplicate_through_trait(mut populated: RedBlackTreeMap<i32, String>) {
    let previous = Collection::insert(&mut populated, 30, "thirty".to_string());

    assert_eq!(previous, Some("v30".to_string()));
    assert_eq!(Collection::size(&populated), 8);
    assert_eq!(Collection::find(&populated, &30), Some(&"thirty".to_string()));
}

#[rstest]
fn test_remove_reports_presence(mut populated: RedBlackTreeMap<i32, String>) {
    assert_eq!(drain(&mut populated, &[20, 20, 55, 90]), 2);
    assert_eq!(Collection::size(&populated), 6);
    assert_eq!(Collection::find(&populated, &20), None);
    assert!(populated.validate().is_ok());
}

#[rstest]
#[case(25, 65, vec![30, 50, 60])]
#[case(10, 10, vec![10])]
#[case(91, 100, vec![])]
#[case(65, 25, vec![])]
fn test_find_range_through_trait(
    populated: RedBlackTreeMap<i32, String>,
    #[case] low: i32,
    #[case] high: i32,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(sorted_range(&populated, low, high), expected);
}

#[rstest]
fn test_height_through_trait(populated: RedBlackTreeMap<i32, String>) {
    let height = Collection::height(&populated);
    assert_eq!(height, populated.height());
    assert!((4..=8).contains(&height));
}

#[rstest]
fn test_trait_object_dispatch() {
    let mut boxed: Box<dyn Collection<i32, String>> = Box::new(RedBlackTreeMap::new());
    boxed.insert(2, "b".to_string());
    boxed.insert(1, "a".to_string());

    assert_eq!(boxed.size(), 2);
    assert_eq!(boxed.keys(), vec![&1, &2]);
    assert!(boxed.remove(&1));
    assert!(!boxed.is_empty());
}
