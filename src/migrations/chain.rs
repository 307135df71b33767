//! Revision graph of the schema migrations.
//!
//! Every migration names its predecessors. The root has none, a linear step has
//! one and a merge point has several. [`resolve`] turns the registry into an
//! application order and rejects graphs that cannot be applied unambiguously.
use std::collections::{HashMap, HashSet};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub id: &'static str,
    pub parents: &'static [&'static str],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("revision {0} is registered twice")]
    Duplicate(&'static str),

    #[error("revision {revision} depends on unknown revision {parent}")]
    UnknownParent {
        revision: &'static str,
        parent: &'static str,
    },

    #[error("revisions {0:?} form a cycle")]
    Cycle(Vec<&'static str>),

    #[error("expected exactly one root revision, found {0:?}")]
    Roots(Vec<&'static str>),

    #[error("expected exactly one head revision, found {0:?}")]
    Heads(Vec<&'static str>),
}

/// Returns indices into `revisions` such that each revision comes after all of
/// its parents. Among revisions that become ready together, registration order
/// wins.
pub fn resolve(revisions: &[Revision]) -> Result<Vec<usize>, ChainError> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(revisions.len());
    for (i, revision) in revisions.iter().enumerate() {
        if index.insert(revision.id, i).is_some() {
            return Err(ChainError::Duplicate(revision.id));
        }
    }

    for revision in revisions {
        for parent in revision.parents {
            if !index.contains_key(parent) {
                return Err(ChainError::UnknownParent {
                    revision: revision.id,
                    parent: *parent,
                });
            }
        }
    }

    let mut placed = vec![false; revisions.len()];
    let mut order = Vec::with_capacity(revisions.len());
    while order.len() < revisions.len() {
        let next = (0..revisions.len()).find(|&i| {
            !placed[i]
                && revisions[i]
                    .parents
                    .iter()
                    .all(|parent| placed[index[parent]])
        });
        match next {
            Some(i) => {
                placed[i] = true;
                order.push(i);
            }
            None => {
                let stuck = revisions
                    .iter()
                    .zip(&placed)
                    .filter(|(_, done)| !**done)
                    .map(|(revision, _)| revision.id)
                    .collect();
                return Err(ChainError::Cycle(stuck));
            }
        }
    }

    let roots: Vec<&'static str> = revisions
        .iter()
        .filter(|revision| revision.parents.is_empty())
        .map(|revision| revision.id)
        .collect();
    if roots.len() != 1 {
        return Err(ChainError::Roots(roots));
    }

    let referenced: HashSet<&str> = revisions
        .iter()
        .flat_map(|revision| revision.parents.iter().copied())
        .collect();
    let heads: Vec<&'static str> = revisions
        .iter()
        .filter(|revision| !referenced.contains(revision.id))
        .map(|revision| revision.id)
        .collect();
    if heads.len() != 1 {
        return Err(ChainError::Heads(heads));
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn rev(id: &'static str, parents: &'static [&'static str]) -> Revision {
        Revision { id, parents }
    }

    fn ids(revisions: &[Revision], order: &[usize]) -> Vec<&'static str> {
        order.iter().map(|&i| revisions[i].id).collect()
    }

    #[test]
    fn linear_chain_keeps_dependency_order() {
        let revisions = [rev("c", &["b"]), rev("a", &[]), rev("b", &["a"])];
        let order = resolve(&revisions).unwrap();
        assert_eq!(ids(&revisions, &order), ["a", "b", "c"]);
    }

    #[test]
    fn branches_merge_before_dependents() {
        let revisions = [
            rev("root", &[]),
            rev("left", &["root"]),
            rev("right", &["root"]),
            rev("merge", &["left", "right"]),
            rev("tail", &["merge"]),
        ];
        let order = resolve(&revisions).unwrap();
        assert_eq!(
            ids(&revisions, &order),
            ["root", "left", "right", "merge", "tail"]
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let revisions = [rev("a", &[]), rev("a", &[])];
        assert_eq!(resolve(&revisions), Err(ChainError::Duplicate("a")));
    }

    #[test]
    fn rejects_unknown_parent() {
        let revisions = [rev("a", &[]), rev("b", &["missing"])];
        assert_eq!(
            resolve(&revisions),
            Err(ChainError::UnknownParent {
                revision: "b",
                parent: "missing"
            })
        );
    }

    #[test]
    fn rejects_cycles() {
        let revisions = [rev("a", &[]), rev("b", &["a", "c"]), rev("c", &["b"])];
        assert_eq!(resolve(&revisions), Err(ChainError::Cycle(vec!["b", "c"])));
    }

    #[test]
    fn rejects_unmerged_heads() {
        let revisions = [rev("a", &[]), rev("b", &["a"]), rev("c", &["a"])];
        assert_eq!(resolve(&revisions), Err(ChainError::Heads(vec!["b", "c"])));
    }

    #[test]
    fn rejects_multiple_roots() {
        let revisions = [rev("a", &[]), rev("b", &[]), rev("c", &["a", "b"])];
        assert_eq!(resolve(&revisions), Err(ChainError::Roots(vec!["a", "b"])));
    }
}
