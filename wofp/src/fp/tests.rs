use super::*;
use crate::config::WofpConfig;
use crate::error::WofpError;
use ndarray::Array2;
use std::collections::{BTreeMap, HashMap};

fn transactions(raw: &[&[&str]]) -> Vec<Transaction> {
    raw.iter()
        .map(|tx| tx.iter().map(|item| item.to_string()).collect())
        .collect()
}

fn weights(raw: &[(&str, f64)]) -> HashMap<String, f64> {
    raw.iter().map(|&(item, w)| (item.to_string(), w)).collect()
}

fn letters_db() -> (Vec<Transaction>, HashMap<String, f64>) {
    (
        transactions(&[
            &["A", "C", "B", "D"],
            &["B", "E", "D"],
            &["E", "B", "A"],
            &["Y", "C", "D"],
            &["D", "A"],
        ]),
        weights(&[("A", 2.0), ("B", 4.0), ("D", 8.0), ("C", 1.0), ("Y", 0.5), ("E", 23.0)]),
    )
}

fn ontology_db() -> (Vec<Transaction>, HashMap<String, f64>) {
    let db = transactions(&[
        &["GO1", "GO3", "GO2", "R-1"],
        &["GO2", "HP1", "R-1"],
        &["HP1", "GO2", "GO1"],
        &["R-2", "GO3", "R-1"],
        &["R-1", "GO1"],
    ]);
    let w = weights(&[
        ("GO1", 1.0),
        ("GO2", 1.0),
        ("GO3", 1.0),
        ("HP1", 1.0),
        ("R-1", 1.0),
        ("R-2", 1.0),
    ]);
    (db, w)
}

fn expected(raw: &[(&str, f64)]) -> BTreeMap<String, f64> {
    raw.iter().map(|&(key, w)| (key.to_string(), w)).collect()
}

#[test]
fn test_frequency_table_canonical_order() {
    let (db, w) = letters_db();
    let (table, transaction_weights) = build_frequency_table(&db, &w, 0.25).unwrap();

    let order: Vec<(&str, f64)> = table
        .items()
        .iter()
        .map(|entry| (entry.item.as_str(), entry.support))
        .collect();
    assert_eq!(
        order,
        vec![("D", 0.8), ("A", 0.6), ("B", 0.6), ("C", 0.4), ("E", 0.4)]
    );

    // Y is infrequent but still counts toward its transaction's mean
    let expected_weights = [3.75, 11.667, 9.667, 3.167, 5.0];
    assert_eq!(transaction_weights.len(), expected_weights.len());
    for (got, want) in transaction_weights.iter().zip(expected_weights) {
        assert!((got - want).abs() < 5e-4, "{} != {}", got, want);
    }
}

#[test]
fn test_canonical_order_is_strict() {
    let (db, w) = letters_db();
    let (table, _) = build_frequency_table(&db, &w, 0.1).unwrap();

    for pair in table.items().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.support > b.support || (a.support == b.support && a.item < b.item));
    }
}

#[test]
fn test_ontology_rules_and_cross_category_filter() {
    let (db, w) = ontology_db();
    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.25, 0.2)).unwrap();

    assert_eq!(
        rules_to_map(&result.rules),
        expected(&[
            ("GO1:R-1", 0.4),
            ("GO2:GO1", 0.4),
            ("GO2:R-1", 0.4),
            ("GO3:R-1", 0.4),
            ("HP1:GO2", 0.4),
        ])
    );
    assert_eq!(
        rules_to_map(&result.cross_category_rules),
        expected(&[
            ("GO1:R-1", 0.4),
            ("GO2:R-1", 0.4),
            ("GO3:R-1", 0.4),
            ("HP1:GO2", 0.4),
        ])
    );
}

#[test]
fn test_rules_follow_canonical_order() {
    let (db, w) = ontology_db();
    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.25, 0.2)).unwrap();

    let keys: Vec<String> = result.rules.iter().map(AssociationRule::key).collect();
    assert_eq!(keys, vec!["GO1:R-1", "GO2:R-1", "GO2:GO1", "GO3:R-1", "HP1:GO2"]);
}

#[test]
fn test_top_item_is_never_mined() {
    let (db, w) = ontology_db();
    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.25, 0.0)).unwrap();

    let top = result.frequency_table.item(0).unwrap();
    assert_eq!(top, "R-1");
    assert!(result.rules.iter().all(|rule| rule.item != top));
}

#[test]
fn test_threshold_compares_before_rounding() {
    // GO3 has 0.2 of mass under GO1, exactly the threshold: not emitted
    let (db, w) = ontology_db();
    let (table, tw) = build_frequency_table(&db, &w, 0.25).unwrap();
    let tree = build_wofp_tree(&db, &table, &tw).unwrap();

    let go3 = table.rank("GO3").unwrap();
    let go1 = table.rank("GO1").unwrap();
    let base = conditional_pattern_base(go3, &tree);
    assert!((base.get(go1).unwrap() - 0.2).abs() < 1e-12);

    let rules = mine_rules(&tree, &table, 0.199).unwrap();
    assert!(rules_to_map(&rules).contains_key("GO3:GO1"));
    let rules = mine_rules(&tree, &table, 0.2).unwrap();
    assert!(!rules_to_map(&rules).contains_key("GO3:GO1"));
}

#[test]
fn test_node_weights_conserve_transaction_mass() {
    let (db, w) = letters_db();
    let (table, tw) = build_frequency_table(&db, &w, 0.25).unwrap();
    let tree = build_wofp_tree(&db, &table, &tw).unwrap();
    let total: f64 = tw.iter().sum();

    for rank in 0..table.len() {
        let expected: f64 = db
            .iter()
            .zip(&tw)
            .filter(|(tx, _)| table.project(tx).contains(&rank))
            .map(|(_, &weight)| weight / total)
            .sum();
        assert!((tree.item_weight(rank) - expected).abs() < 1e-9);
    }
}

#[test]
fn test_tree_shape_for_ontology_db() {
    let (db, w) = ontology_db();
    let (table, tw) = build_frequency_table(&db, &w, 0.25).unwrap();
    let tree = build_wofp_tree(&db, &table, &tw).unwrap();

    // root, R-1 branch (R-1, GO1, GO2, GO3, GO2, HP1, GO3), GO1 branch (GO1, GO2, HP1)
    assert_eq!(tree.len(), 11);

    let root = &tree.nodes[tree.root_index];
    assert!(root.item.is_none() && root.parent.is_none());
    assert_eq!(root.children.len(), 2);

    let r1 = root.children[&table.rank("R-1").unwrap()];
    assert!((tree.nodes[r1].weight - 0.8).abs() < 1e-12);
    assert_eq!(tree.nodes[r1].children.len(), 3);

    assert_eq!(tree.occurrences(table.rank("GO2").unwrap()).len(), 3);
    assert_eq!(tree.occurrences(table.rank("HP1").unwrap()).len(), 2);
}

#[test]
fn test_tree_invariants() {
    let (db, w) = letters_db();
    let (table, tw) = build_frequency_table(&db, &w, 0.25).unwrap();
    let tree = build_wofp_tree(&db, &table, &tw).unwrap();

    for (idx, node) in tree.nodes.iter().enumerate() {
        assert_eq!(node.id, idx);
        assert!(node.weight >= 0.0 && node.weight <= 1.0 + 1e-12);
        if idx == tree.root_index {
            continue;
        }
        let parent = node.parent.expect("non-root node has a parent");
        let item = node.item.expect("non-root node has an item");
        assert_eq!(tree.nodes[parent].children[&item], idx);
        assert!(tree.item_index[&item].contains(&idx));
    }
}

#[test]
fn test_wofp_tree_insert() {
    let mut tree = WOFPTree::new();

    tree.insert_transaction(&[1, 2, 3], 0.5);
    assert!(tree.nodes[0].children.contains_key(&1));
    assert_eq!(tree.occurrences(3).len(), 1);

    // Shares the 1 -> 2 prefix
    tree.insert_transaction(&[1, 2, 4], 0.25);
    let node1 = tree.nodes[0].children[&1];
    assert_eq!(tree.nodes[node1].weight, 0.75);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.occurrences(4).len(), 1);

    let base = conditional_pattern_base(4, &tree);
    assert_eq!(base.sorted(), vec![(1, 0.25), (2, 0.25)]);
    assert!(conditional_pattern_base(1, &tree).is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let (db, w) = ontology_db();
    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.25, 0.0)).unwrap();

    let once = filter_cross_category(&result.rules, 2);
    let twice = filter_cross_category(&once, 2);
    assert_eq!(once, twice);
    assert_eq!(once, result.cross_category_rules);
}

#[test]
fn test_runs_are_deterministic() {
    let (db, w) = letters_db();
    let config = WofpConfig::new(0.25, 0.05);
    let first = wofp_algorithm(&db, &w, &config).unwrap();
    let second = wofp_algorithm(&db, &w, &config).unwrap();

    assert_eq!(first.frequency_table, second.frequency_table);
    assert_eq!(first.transaction_weights, second.transaction_weights);
    assert_eq!(first.rules, second.rules);
    assert_eq!(first.tree.len(), second.tree.len());
    for rank in 0..first.frequency_table.len() {
        assert_eq!(
            first.tree.occurrences(rank).len(),
            second.tree.occurrences(rank).len()
        );
        assert_eq!(first.tree.item_weight(rank), second.tree.item_weight(rank));
    }
}

#[test]
fn test_full_support_keeps_nothing() {
    let (db, w) = letters_db();
    let result = wofp_algorithm(&db, &w, &WofpConfig::new(1.0, 0.2)).unwrap();

    assert!(result.frequency_table.is_empty());
    assert!(result.tree.is_empty());
    assert!(result.rules.is_empty());
    assert_eq!(result.transaction_weights.len(), 5);
}

#[test]
fn test_empty_database_is_not_an_error() {
    let result = wofp_algorithm(&[], &HashMap::new(), &WofpConfig::default()).unwrap();

    assert!(result.frequency_table.is_empty());
    assert!(result.transaction_weights.is_empty());
    assert!(result.tree.is_empty());
    assert!(result.rules.is_empty());
}

#[test]
fn test_infrequent_item_absent_from_index() {
    let (db, w) = letters_db();
    let result = wofp_algorithm(&db, &w, &WofpConfig::default()).unwrap();

    assert!(result.frequency_table.rank("Y").is_none());
    assert_eq!(result.tree.item_index.len(), result.frequency_table.len());
}

#[test]
fn test_missing_weight_names_item() {
    let db = transactions(&[&["A", "B"], &["A", "Q"]]);
    let w = weights(&[("A", 1.0), ("B", 1.0)]);

    match wofp_algorithm(&db, &w, &WofpConfig::default()) {
        Err(WofpError::MissingWeight { item }) => assert_eq!(item, "Q"),
        other => panic!("expected missing weight, got {:?}", other.map(|r| r.rules)),
    }
}

#[test]
fn test_invalid_thresholds() {
    let (db, w) = letters_db();

    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.0, 0.2));
    assert!(matches!(
        result,
        Err(WofpError::InvalidThreshold { name: "min_support", .. })
    ));

    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.25, 1.0));
    assert!(matches!(
        result,
        Err(WofpError::InvalidThreshold { name: "min_weight", .. })
    ));

    let (table, tw) = build_frequency_table(&db, &w, 0.25).unwrap();
    let tree = build_wofp_tree(&db, &table, &tw).unwrap();
    assert!(mine_rules(&tree, &table, -0.5).is_err());
}

#[test]
fn test_zero_total_weight_is_invalid() {
    let db = transactions(&[&["A", "B"], &["A"]]);
    let w = weights(&[("A", 0.0), ("B", 0.0)]);

    let result = wofp_algorithm(&db, &w, &WofpConfig::default());
    assert!(matches!(result, Err(WofpError::InvalidInput(_))));
}

#[test]
fn test_matrix_input_matches_set_input() {
    let (db, w) = ontology_db();
    let columns: Vec<String> = ["GO1", "GO2", "GO3", "HP1", "R-1", "R-2"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let matrix = Array2::from_shape_vec(
        (5, 6),
        vec![
            1, 1, 1, 0, 1, 0, //
            0, 1, 0, 1, 1, 0, //
            1, 1, 0, 1, 0, 0, //
            0, 0, 1, 0, 1, 1, //
            1, 0, 0, 0, 1, 0, //
        ],
    )
    .unwrap();

    let from_matrix = transactions_from_matrix(matrix.view(), &columns).unwrap();
    let config = WofpConfig::default();
    let a = wofp_algorithm(&from_matrix, &w, &config).unwrap();
    let b = wofp_algorithm(&db, &w, &config).unwrap();
    assert_eq!(rules_to_map(&a.rules), rules_to_map(&b.rules));
}

#[test]
fn test_overflowing_weights_are_rejected() {
    let db = transactions(&[&["A", "B"], &["A", "B"], &["B"]]);
    let w = weights(&[("A", 1e308), ("B", 1e308)]);

    let (_, tw) = build_frequency_table(&db, &w, 0.25).unwrap();
    assert!(tw.iter().all(|weight| weight.is_finite()));

    let result = wofp_algorithm(&db, &w, &WofpConfig::new(0.25, 0.1));
    assert!(matches!(result, Err(WofpError::InvalidInput(_))));
}
