use serde::Serialize;

use crate::model::{Axis, Planar};

/// One merge of two sorted runs covering input positions `low..=high`.
/// `order` holds the input indices occupying that range once merged.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergeStep {
    pub low: usize,
    pub high: usize,
    pub order: Vec<usize>,
}

/// Final order (input indices) plus every merge in the order it happened.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergeTrace {
    pub order: Vec<usize>,
    pub steps: Vec<MergeStep>,
}

/// Stable ascending order of `items` by `axis`, as input indices.
pub fn sort_order<P: Planar>(items: &[P], axis: Axis) -> Vec<usize> {
    let keys: Vec<f64> = items.iter().map(|p| p.coord(axis)).collect();
    sort_keys(&keys, None)
}

/// Returns the items stably reordered by `axis`, ascending.
pub fn merge_sort<P: Planar + Clone>(items: &[P], axis: Axis) -> Vec<P> {
    sort_order(items, axis).into_iter().map(|i| items[i].clone()).collect()
}

/// Same ordering as [`sort_order`], recording each merge for step-by-step replay.
pub fn merge_sort_traced<P: Planar>(items: &[P], axis: Axis) -> MergeTrace {
    let keys: Vec<f64> = items.iter().map(|p| p.coord(axis)).collect();
    let mut steps = Vec::new();
    let order = sort_keys(&keys, Some(&mut steps));
    MergeTrace { order, steps }
}

fn sort_keys(keys: &[f64], mut steps: Option<&mut Vec<MergeStep>>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    if order.len() > 1 {
        let mut aux = order.clone();
        divide(keys, &mut order, &mut aux, 0, keys.len() - 1, &mut steps);
    }
    order
}

// Inclusive range; the left run takes the extra element on odd lengths.
fn divide(
    keys: &[f64],
    order: &mut [usize],
    aux: &mut [usize],
    low: usize,
    high: usize,
    steps: &mut Option<&mut Vec<MergeStep>>,
) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    divide(keys, order, aux, low, mid, steps);
    divide(keys, order, aux, mid + 1, high, steps);
    conquer(keys, order, aux, low, mid, high);
    if let Some(steps) = steps.as_deref_mut() {
        steps.push(MergeStep { low, high, order: order[low..=high].to_vec() });
    }
}

fn conquer(keys: &[f64], order: &mut [usize], aux: &mut [usize], low: usize, mid: usize, high: usize) {
    let (mut i, mut j, mut k) = (low, mid + 1, low);
    while i <= mid && j <= high {
        // ties go to the left run, which keeps the sort stable
        if keys[order[j]] < keys[order[i]] {
            aux[k] = order[j];
            j += 1;
        } else {
            aux[k] = order[i];
            i += 1;
        }
        k += 1;
    }
    while i <= mid {
        aux[k] = order[i];
        i += 1;
        k += 1;
    }
    while j <= high {
        aux[k] = order[j];
        j += 1;
        k += 1;
    }
    order[low..=high].copy_from_slice(&aux[low..=high]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn sorts_by_x() {
        let pts = vec![Point::new(3.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let xs: Vec<f64> = merge_sort(&pts, Axis::X).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let pts = vec![
            Point::named(0.0, 2.0, "a"),
            Point::named(0.0, 1.0, "b"),
            Point::named(0.0, 2.0, "c"),
            Point::named(0.0, 1.0, "d"),
        ];
        assert_eq!(sort_order(&pts, Axis::Y), vec![1, 3, 0, 2]);
    }

    #[test]
    fn trace_ends_with_full_range() {
        let pts = vec![(4.0, 0.0), (3.0, 0.0), (2.0, 0.0), (1.0, 0.0), (0.0, 0.0)];
        let trace = merge_sort_traced(&pts, Axis::X);
        assert_eq!(trace.order, vec![4, 3, 2, 1, 0]);
        // n - 1 merges for n items
        assert_eq!(trace.steps.len(), 4);
        let last = trace.steps.last().unwrap();
        assert_eq!((last.low, last.high), (0, 4));
        assert_eq!(last.order, trace.order);
        // left half of five is three long
        assert!(trace.steps.iter().any(|s| s.low == 0 && s.high == 2));
    }

    #[test]
    fn empty_and_single() {
        let none: Vec<Point> = Vec::new();
        assert!(sort_order(&none, Axis::X).is_empty());
        assert_eq!(sort_order(&[Point::new(1.0, 1.0)], Axis::Y), vec![0]);
    }
}
