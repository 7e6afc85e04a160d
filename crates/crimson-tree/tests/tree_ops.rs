use crimson_tree::print::dump;
use crimson_tree::RbTree;

#[test]
fn insert_contains_remove_roundtrip() {
    let mut tree = RbTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);

    tree.insert(5);
    tree.insert(1);
    tree.insert(9);
    assert_eq!(tree.len(), 3);
    assert!(tree.contains(&5));
    assert!(tree.contains(&1));
    assert!(tree.contains(&9));
    assert!(!tree.contains(&7));
    tree.assert_valid().unwrap();

    assert!(tree.remove(&5));
    assert!(!tree.contains(&5));
    assert!(!tree.remove(&5));
    assert_eq!(tree.len(), 2);
    tree.assert_valid().unwrap();
}

#[test]
fn ascending_run_triggers_single_rotation() {
    let mut tree = RbTree::new();
    tree.insert(10);
    tree.insert(20);
    tree.insert(30);

    // 20 is pulled up to a black root with red children.
    assert_eq!(dump(&tree), "(20,B)\n(10,R)(30,R)\n");
    tree.assert_valid().unwrap();
}

#[test]
fn delete_min_of_ascending_run() {
    let mut tree = RbTree::new();
    for v in 1..=7 {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }

    assert!(tree.remove(&1));
    tree.assert_valid().unwrap();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7]);
}

#[test]
fn remove_absent_leaves_structure_untouched() {
    let mut tree = RbTree::new();
    for v in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(v);
    }
    let before = dump(&tree);

    assert!(!tree.remove(&99));
    assert!(!tree.remove(&0));

    assert_eq!(dump(&tree), before);
    assert_eq!(tree.len(), 9);
    tree.assert_valid().unwrap();
}

#[test]
fn duplicates_accumulate() {
    let mut tree = RbTree::new();
    tree.insert(3);
    tree.insert(3);
    tree.insert(1);
    tree.insert(3);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 3, 3]);
    tree.assert_valid().unwrap();

    // Each remove takes exactly one occurrence.
    assert!(tree.remove(&3));
    assert_eq!(tree.len(), 3);
    assert!(tree.contains(&3));
    assert!(tree.remove(&3));
    assert!(tree.remove(&3));
    assert!(!tree.contains(&3));
    tree.assert_valid().unwrap();
}

#[test]
fn insert_delete_ladder_stays_valid() {
    let mut tree = RbTree::new();
    for i in 0..200 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 200);

    for i in (0..200).step_by(2) {
        assert!(tree.remove(&i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 100);
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        (0..200).filter(|i| i % 2 == 1).collect::<Vec<_>>()
    );

    for i in (0..200).step_by(2) {
        assert!(!tree.contains(&i));
    }
}

#[test]
fn descending_and_mixed_orders_stay_valid() {
    let mut tree = RbTree::new();
    for v in (0..100).rev() {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (0..100).collect::<Vec<_>>());

    let mut zigzag = RbTree::new();
    for v in [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43] {
        zigzag.insert(v);
        zigzag.assert_valid().unwrap();
    }
    for v in [25, 50, 12, 87] {
        assert!(zigzag.remove(&v));
        zigzag.assert_valid().unwrap();
    }
    assert_eq!(
        zigzag.iter().copied().collect::<Vec<_>>(),
        vec![6, 18, 31, 37, 43, 62, 75]
    );
}

#[test]
fn first_last_and_clear() {
    let mut tree: RbTree<String> = RbTree::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);

    tree.extend(["pear", "apple", "quince"].map(String::from));
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.last().map(String::as_str), Some("quince"));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.first(), None);
    tree.assert_valid().unwrap();

    // The tree is fully usable after clear.
    tree.insert("fig".to_string());
    assert!(tree.contains(&"fig".to_string()));
    tree.assert_valid().unwrap();
}

#[test]
fn collect_and_debug_render_in_order() {
    let tree: RbTree<i32> = [9, 4, 6, 2, 8].into_iter().collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8, 9]);
    assert_eq!(format!("{tree:?}"), "{2, 4, 6, 8, 9}");

    let borrowed: Vec<&i32> = (&tree).into_iter().collect();
    assert_eq!(borrowed, vec![&2, &4, &6, &8, &9]);
}
