//! Tests for `knapsack`.

use super::knapsack::{by_ratio, run};
use crate::samples::{SAMPLE_CAPACITY, sample_items};
use crate::types::{KnapsackItem, NodeStatus};

fn approx(a: f64, b: f64) -> bool {
  (a - b).abs() < 1e-9
}

#[test]
fn sample_items_reach_optimal_value() {
  let steps = run(&sample_items(), SAMPLE_CAPACITY);
  let last = steps.last().unwrap();
  assert!(approx(last.total_value.unwrap(), 240.0));
  let selected = last.selected_items.as_ref().unwrap();
  let c = selected.iter().find(|s| s.id == "C").unwrap();
  assert!((c.fraction - 0.667).abs() < 1e-3);
  assert!(approx(c.fraction, 20.0 / 30.0));
}

#[test]
fn step_layout_is_unsorted_sorted_decisions_final() {
  let steps = run(&sample_items(), SAMPLE_CAPACITY);
  assert_eq!(steps.len(), 2 + 3 + 1);
  assert!(steps[0].description.starts_with("Unsorted"));
  assert!(steps[1].description.starts_with("Sorted"));
  assert!(steps[5].description.starts_with("Knapsack complete"));
}

#[test]
fn selected_items_accumulate_per_decision() {
  let steps = run(&sample_items(), SAMPLE_CAPACITY);
  let lens: Vec<usize> = steps
    .iter()
    .map(|s| s.selected_items.as_ref().map_or(0, Vec::len))
    .collect();
  assert_eq!(lens, vec![0, 0, 1, 2, 3, 3]);
  assert!(approx(steps[2].total_value.unwrap(), 60.0));
  assert!(approx(steps[3].total_value.unwrap(), 160.0));
}

#[test]
fn items_after_full_knapsack_are_rejected() {
  let mut items = sample_items();
  items.push(KnapsackItem::new("D", 10.0, 10.0));
  let steps = run(&items, SAMPLE_CAPACITY);
  assert_eq!(steps.len(), 2 + 4 + 1);
  let last = steps.last().unwrap();
  assert_eq!(last.node_status("D"), Some(NodeStatus::Rejected));
  assert_eq!(last.node_status("C"), Some(NodeStatus::Finalized));
  let d = last
    .selected_items
    .as_ref()
    .unwrap()
    .iter()
    .find(|s| s.id == "D")
    .unwrap();
  assert_eq!(d.fraction, 0.0);
  assert!(approx(last.total_value.unwrap(), 240.0));
}

#[test]
fn everything_fits_when_capacity_is_large() {
  let steps = run(&sample_items(), 1000.0);
  let last = steps.last().unwrap();
  assert!(approx(last.total_value.unwrap(), 280.0));
  assert!(
    last
      .selected_items
      .as_ref()
      .unwrap()
      .iter()
      .all(|s| s.fraction == 1.0)
  );
}

#[test]
fn zero_capacity_rejects_everything() {
  let steps = run(&sample_items(), 0.0);
  let last = steps.last().unwrap();
  assert!(last.node_statuses.values().all(|s| *s == NodeStatus::Rejected));
  assert_eq!(last.total_value, Some(0.0));
}

#[test]
fn sort_is_stable_for_equal_ratios() {
  let items = vec![
    KnapsackItem::new("x", 10.0, 5.0),
    KnapsackItem::new("y", 4.0, 2.0),
    KnapsackItem::new("z", 30.0, 3.0),
  ];
  let order: Vec<&str> = by_ratio(&items).iter().map(|i| i.id.as_str()).collect();
  assert_eq!(order, vec!["z", "x", "y"]);
}

#[test]
fn zero_weight_item_is_taken_first() {
  let mut items = sample_items();
  items.push(KnapsackItem::new("gift", 5.0, 0.0));
  let steps = run(&items, SAMPLE_CAPACITY);
  assert_eq!(steps[2].current_node_id.as_deref(), Some("gift"));
  assert!(approx(steps.last().unwrap().total_value.unwrap(), 245.0));
}
