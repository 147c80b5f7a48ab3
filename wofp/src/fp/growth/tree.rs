use std::collections::HashMap;
use std::fmt;

/// Node ids of every occurrence of an item, keyed by item rank.
pub type ItemIndex = HashMap<usize, Vec<usize>>;

#[derive(Debug, Clone)]
pub struct WOFPNode {
    pub id: usize,
    /// Rank of the item in the frequency table; `None` only for the root.
    pub item: Option<usize>,
    /// Normalized weight of every transaction routed through this node.
    pub weight: f64,
    pub parent: Option<usize>,
    /// Child node id per item rank; an item appears at most once among siblings.
    pub children: HashMap<usize, usize>,
}

/// Weighted prefix tree stored as an arena: a node's id is its index in `nodes`.
#[derive(Debug, Clone)]
pub struct WOFPTree {
    pub nodes: Vec<WOFPNode>,
    pub item_index: ItemIndex,
    pub root_index: usize,
}

impl WOFPNode {
    pub fn new_root() -> Self {
        Self {
            id: 0,
            item: None,
            weight: 0.0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(id: usize, item: usize, weight: f64, parent: usize) -> Self {
        Self {
            id,
            item: Some(item),
            weight,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

impl fmt::Display for WOFPNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            Some(item) => write!(f, "{}:{} {{{}}}", self.id, item, self.weight),
            None => write!(f, "root"),
        }
    }
}

impl Default for WOFPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl WOFPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![WOFPNode::new_root()],
            item_index: HashMap::new(),
            root_index: 0,
        }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Routes one canonically ordered transaction from the root, adding
    /// `weight` to every node on its path and creating missing nodes.
    pub fn insert_transaction(&mut self, transaction: &[usize], weight: f64) {
        let mut current_index = self.root_index;

        for &item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].weight += weight;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(WOFPNode::new_item(new_index, item, weight, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.item_index.entry(item).or_default().push(new_index);
                current_index = new_index;
            }
        }
    }

    pub fn occurrences(&self, item: usize) -> &[usize] {
        self.item_index.get(&item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total weight over every occurrence of `item`.
    pub fn item_weight(&self, item: usize) -> f64 {
        self.occurrences(item)
            .iter()
            .map(|&idx| self.nodes[idx].weight)
            .sum()
    }

    /// Strict ancestors of a node, nearest first, root excluded.
    pub fn ancestors(&self, index: usize) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.nodes[index].parent,
        }
    }
}

pub struct Ancestors<'a> {
    tree: &'a WOFPTree,
    current: Option<usize>,
}

impl Iterator for Ancestors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.current?;
        if index == self.tree.root_index {
            self.current = None;
            return None;
        }
        self.current = self.tree.nodes[index].parent;
        Some(index)
    }
}
