//! Two-pass flood fill: labels tets reachable from the inlet, then restricts to those
//! also reachable from the outlet.

use std::collections::BTreeSet;

use crate::adjacency::ElementElementMap;
use crate::types::Label;

/// Run the forward sweep from `front0`, labelling every tet reached from an inlet-seed
/// tet through the live face-adjacency graph.
///
/// Uses a `BTreeSet` frontier so traversal order — and hence tet/facet output order
/// downstream — is reproducible across runs on the same input.
pub fn forward_sweep(ee: &ElementElementMap, front0: &[usize]) -> Vec<Label> {
    let mut labels = vec![Label::NotReached; ee.len()];
    let mut frontier: BTreeSet<usize> = front0.iter().copied().collect();

    while let Some(&i) = frontier.iter().next() {
        frontier.remove(&i);
        if labels[i] == Label::Forward {
            continue;
        }
        labels[i] = Label::Forward;
        for neighbor in ee[i].into_iter().flatten() {
            if labels[neighbor] == Label::NotReached {
                frontier.insert(neighbor);
            }
        }
    }

    labels
}

/// Run the backward sweep from `front1`, promoting `Forward`-labelled tets reachable
/// from an outlet-seed tet to `Percolating`. Tets labelled `NotReached` are off-limits.
pub fn backward_sweep(ee: &ElementElementMap, front1: &[usize], labels: &mut [Label]) {
    let mut frontier: BTreeSet<usize> = front1
        .iter()
        .copied()
        .filter(|&i| labels[i] == Label::Forward)
        .collect();

    while let Some(&i) = frontier.iter().next() {
        frontier.remove(&i);
        if labels[i] == Label::Percolating {
            continue;
        }
        if labels[i] != Label::Forward {
            continue;
        }
        labels[i] = Label::Percolating;
        for neighbor in ee[i].into_iter().flatten() {
            if labels[neighbor] == Label::Forward {
                frontier.insert(neighbor);
            }
        }
    }
}

/// Run both sweeps and return the final per-tet labels.
pub fn flood(ee: &ElementElementMap, front0: &[usize], front1: &[usize]) -> Vec<Label> {
    let mut labels = forward_sweep(ee, front0);
    backward_sweep(ee, front1, &mut labels);
    labels
}
