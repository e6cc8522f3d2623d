//! End-to-end checks of every algorithm on its documented demonstration
//! input.

use algor_core::graph::Digraph;
use algor_core::search::{AvlTree, BinarySearchTree, binary_search, linear_search};
use algor_core::sort::{heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
use algor_core::traverse::{bfs, dfs, topological_order};

#[test]
fn every_sort_produces_the_documented_result() {
    let sorts: [(&str, fn(&mut [i32])); 5] = [
        ("insertion", insertion_sort),
        ("selection", selection_sort),
        ("heap", heap_sort),
        ("quick", quick_sort),
        ("merge", merge_sort),
    ];
    for (name, sort) in sorts {
        let mut arr = [12, 11, 13, 5, 6];
        sort(&mut arr);
        assert_eq!(arr, [5, 6, 11, 12, 13], "{name} sort");
    }
}

#[test]
fn searches_find_the_documented_element() {
    // Linear search scans the unsorted array, binary search its sorted form
    assert_eq!(linear_search(&[12, 11, 13, 5, 6], &6), Some(4));
    assert_eq!(binary_search(&[5, 6, 11, 12, 13], &6), Some(1));
}

#[test]
fn bst_deletion_sequence() {
    let mut bst = BinarySearchTree::new();
    for key in [50, 30, 20, 40, 70, 60, 80] {
        bst.insert(key);
    }
    assert_eq!(bst.in_order(), vec![&20, &30, &40, &50, &60, &70, &80]);

    bst.delete(&20); // leaf
    assert_eq!(bst.in_order(), vec![&30, &40, &50, &60, &70, &80]);

    bst.delete(&30); // one child
    assert_eq!(bst.in_order(), vec![&40, &50, &60, &70, &80]);

    bst.delete(&50); // two children
    assert_eq!(bst.in_order(), vec![&40, &60, &70, &80]);
}

#[test]
fn avl_insert_and_delete_sequence() {
    let mut tree = AvlTree::new();
    for key in [10, 50, 40, 25, 30, 20] {
        tree.insert(key).unwrap();
    }
    assert_eq!(tree.in_order(), vec![&10, &20, &25, &30, &40, &50]);

    assert!(tree.delete(&20));
    assert!(tree.delete(&40));
    assert_eq!(tree.in_order(), vec![&10, &25, &30, &50]);
    assert!(tree.height() <= 2);
}

#[test]
fn traversals_on_the_documented_digraph() {
    let mut g = Digraph::new(4);
    for (v, w) in [(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)] {
        g.add_edge(v, w).unwrap();
    }

    let dfs_order = dfs(&g, 2).unwrap();
    assert_eq!(dfs_order[0], 2);
    assert_eq!(dfs_order.len(), 4); // every vertex reachable from 2

    let bfs_order = bfs(&g, 0).unwrap();
    assert_eq!(bfs_order[0], 0);
    assert_eq!(bfs_order.len(), 4);
}

#[test]
fn topological_order_on_a_dag() {
    let mut g = Digraph::new(6);
    for (v, w) in [(5, 2), (5, 0), (2, 3), (3, 1), (0, 1)] {
        g.add_edge(v, w).unwrap();
    }
    let order = topological_order(&g, 5).unwrap();
    let pos = |v: usize| order.iter().position(|&x| x == v).unwrap();
    for (v, w) in [(5, 2), (5, 0), (2, 3), (3, 1), (0, 1)] {
        assert!(pos(v) < pos(w), "edge {v}->{w} violates the order");
    }
}
