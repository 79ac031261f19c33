use tally::{counted_set, CountedSet, CountedSetError, Removal};

fn alphabet() -> CountedSet<char> {
    ('a'..='z').collect()
}

#[test]
fn test_vowel_scenario() {
    let vowels = counted_set!['a', 'e', 'i', 'o', 'u'];
    let alphabet = alphabet();
    let empty: CountedSet<i32> = CountedSet::new();

    assert!(vowels.is_subset(&alphabet));
    assert!(!vowels.is_superset(&alphabet));
    assert!(alphabet.is_superset(&vowels));
    assert!(empty.is_empty());
    assert_eq!(vowels.len(), 5);
    assert!(!vowels.contains(&'b'));

    let mut mutable = vowels.clone();
    mutable.add('a');
    assert_eq!(mutable.len(), 5);
    assert_eq!(mutable.count_of(&'a'), 2);

    assert_eq!(mutable.count_of(&'i'), 1);
    mutable.add('i');
    mutable.add('i');
    assert_eq!(mutable.count_of(&'i'), 3);
    for expected in [2, 1, 0] {
        assert!(mutable.remove(&'i').is_some());
        assert_eq!(mutable.count_of(&'i'), expected);
    }
    assert!(!mutable.contains(&'i'));
    mutable.add('i');

    mutable.add('o');
    mutable.add('o');
    assert_eq!(mutable.count_of(&'o'), 3);
    assert_eq!(mutable.remove_entirely(&'o'), Some(3));
    assert_eq!(mutable.count_of(&'o'), 0);
    assert_eq!(mutable.remove(&'o'), None);
    assert!(!mutable.contains(&'o'));
    mutable.add('o');

    mutable += 'y';
    assert_eq!(mutable.len(), 6);
    let accented: CountedSet<char> = "åáâäàéêèëíîïìøóôöòúûüù".chars().collect();
    mutable += &accented;

    assert!(mutable.intersects(&alphabet));
    assert!(!mutable.is_subset(&alphabet));

    let mut letters = alphabet.intersection(&mutable);
    assert!(letters.remove(&'y').is_some());
    assert_eq!(letters, vowels);

    let bracketed = vowels.map(|c| format!("[{c}]"));
    assert!(bracketed.contains("[a]"));
    assert_eq!(bracketed.len(), 5);
}

#[test]
fn test_capacity_merge_scenario() {
    let mut first: CountedSet<char> = CountedSet::new();
    let mut second: CountedSet<char> = CountedSet::new();
    first.add_all(['A', 'A', 'A', 'B', 'B', 'C']);
    second.add_all(['A', 'B', 'B', 'B', 'B', 'B', 'D']);

    first.capacity_merge(&second);

    let expected: CountedSet<char> =
        CountedSet::try_from_counts([('A', 3), ('B', 5), ('C', 1), ('D', 1)]).unwrap();
    assert_eq!(first, expected);
    // The argument is left as it was.
    assert_eq!(second.count_of(&'B'), 5);
    assert_eq!(second.count_of(&'A'), 1);
}

#[test]
fn test_expanded_scenario() {
    let mut set: CountedSet<char> = CountedSet::new();
    set.add_all(['A', 'A', 'A', 'B', 'B', 'C']);

    let flat: Vec<&char> = set.expanded().collect();
    assert_eq!(flat.len(), 6);
    assert_eq!(flat.iter().filter(|c| ***c == 'A').count(), 3);
    assert_eq!(flat.iter().filter(|c| ***c == 'B').count(), 2);
    assert_eq!(flat.iter().filter(|c| ***c == 'C').count(), 1);
}

#[test]
fn test_any_element() {
    let mut set: CountedSet<String> = CountedSet::new();
    assert_eq!(set.any(), None);
    set += "a".to_string();
    assert_eq!(set.any().map(String::as_str), Some("a"));
}

#[test]
fn test_big_set_equality() {
    let size = 10_000;
    let mut big: CountedSet<u32> = (1..=size).collect();
    let other: CountedSet<u32> = (1..=size).collect();
    assert_eq!(big, other);

    assert_eq!(big.remove(&size), Some(1));
    assert_ne!(big, other);

    big.add(size + 1);
    assert_eq!(big.len(), other.len());
    assert_ne!(big, other);
}

#[test]
fn test_subtract_with_modes() {
    let base: CountedSet<&str> =
        CountedSet::try_from_counts([("bolt", 4), ("nut", 2), ("washer", 1)]).unwrap();
    let used = counted_set!["bolt", "bolt", "nut"];

    let mut decremented = base.clone();
    decremented.subtract_with(&used, Removal::Decrement);
    assert_eq!(decremented.count_of("bolt"), 3);
    assert_eq!(decremented.count_of("nut"), 1);

    let mut erased = base.clone();
    erased.subtract_with(&used, Removal::Entirely);
    assert!(!erased.contains("bolt"));
    assert!(!erased.contains("nut"));
    assert_eq!(erased.count_of("washer"), 1);

    assert_eq!(base.difference(&used), decremented);
}

#[test]
fn test_try_from_counts_errors_propagate() -> anyhow::Result<()> {
    let inventory: CountedSet<&str> = CountedSet::try_from_counts([("apple", 2), ("pear", 1)])?;
    assert_eq!(inventory.total(), 3);

    let result: Result<CountedSet<&str>, CountedSetError> =
        CountedSet::try_from_counts([("apple", 0)]);
    let err = anyhow::Error::from(result.unwrap_err());
    assert_eq!(err.to_string(), "element count must be at least one");
    Ok(())
}

#[test]
fn test_debug_rendering() {
    let set: CountedSet<u8> = counted_set![4, 4];
    assert_eq!(format!("{set:?}"), "CountedSet({4: 2})");
}
