//! Tag Tree
//!
//! Builds the folder/leaf tree from each VM's tag path and flattens it
//! into the row plan the tree view renders.

use crate::models::Vm;

/// A node under a tag folder
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Folder(TagTree),
    Leaf(Vm),
}

/// Ordered mapping of key -> node. Siblings keep first-insertion order.
///
/// Folders and leaves are looked up separately, so a tag that happens to
/// equal a VM name at the same depth yields two sibling entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagTree {
    entries: Vec<(String, TreeNode)>,
}

impl TagTree {
    /// Walk `path` creating folders as needed, then place the VM
    fn insert(&mut self, path: &[String], vm: Vm) {
        let Some((tag, rest)) = path.split_first() else {
            self.insert_leaf(vm);
            return;
        };
        for (key, node) in self.entries.iter_mut() {
            if let TreeNode::Folder(tree) = node {
                if *key == *tag {
                    tree.insert(rest, vm);
                    return;
                }
            }
        }
        let mut folder = TagTree::default();
        folder.insert(rest, vm);
        self.entries.push((tag.clone(), TreeNode::Folder(folder)));
    }

    /// Place a VM keyed by name, replacing a same-named leaf in place
    fn insert_leaf(&mut self, vm: Vm) {
        let existing = self
            .entries
            .iter_mut()
            .find(|(k, node)| *k == vm.name && matches!(node, TreeNode::Leaf(_)));
        match existing {
            Some((_, node)) => *node = TreeNode::Leaf(vm),
            None => self.entries.push((vm.name.clone(), TreeNode::Leaf(vm))),
        }
    }
}

/// Build the tag tree from a flat VM list
pub fn build_tag_tree(vms: &[Vm]) -> TagTree {
    let mut root = TagTree::default();
    for vm in vms {
        root.insert(&vm.tags, vm.clone());
    }
    root
}

/// One row of the rendered tree
#[derive(Debug, Clone, PartialEq)]
pub enum TreeRow {
    Folder {
        /// Path segments joined with `-`; addresses the collapse state
        id: String,
        label: String,
        children: Vec<TreeRow>,
    },
    Leaf {
        label: String,
        vm_name: String,
    },
}

impl TreeRow {
    /// Folders always start collapsed
    pub fn initially_collapsed(&self) -> bool {
        matches!(self, TreeRow::Folder { .. })
    }
}

pub fn folder_id(path: &[&str]) -> String {
    path.join("-")
}

/// DOM id of a folder's child container
pub fn folder_dom_id(id: &str) -> String {
    format!("folder-{}", id)
}

/// Render plan for the whole tree
pub fn tree_rows(tree: &TagTree) -> Vec<TreeRow> {
    fn collect<'a>(tree: &'a TagTree, path: &mut Vec<&'a str>) -> Vec<TreeRow> {
        tree.entries
            .iter()
            .map(|(key, node)| match node {
                TreeNode::Leaf(vm) => TreeRow::Leaf {
                    label: key.clone(),
                    vm_name: vm.name.clone(),
                },
                TreeNode::Folder(child) => {
                    path.push(key.as_str());
                    let id = folder_id(path);
                    let children = collect(child, path);
                    path.pop();
                    TreeRow::Folder {
                        id,
                        label: key.clone(),
                        children,
                    }
                }
            })
            .collect()
    }

    collect(tree, &mut Vec::new())
}
