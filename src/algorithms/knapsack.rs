//! Greedy fractional knapsack.

use tracing::{debug, instrument};

use super::recorder::StepRecorder;
use crate::types::{KnapsackItem, NodeStatus, SelectedItem, Step};

fn describe_order(items: &[&KnapsackItem]) -> String {
  items
    .iter()
    .map(|i| format!("{} ({:.2})", i.id, i.ratio()))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Items by descending value/weight ratio. The sort is stable, so equal
/// ratios keep their input order.
pub(crate) fn by_ratio(items: &[KnapsackItem]) -> Vec<&KnapsackItem> {
  let mut sorted: Vec<&KnapsackItem> = items.iter().collect();
  sorted.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));
  sorted
}

/// Runs the greedy fractional knapsack and returns the full step trace.
///
/// Items are considered in ratio order. Whole items are taken while they fit,
/// then a fraction of the first item that does not fit; every later item is
/// still visited and explicitly rejected.
#[instrument(level = "trace", skip(items), fields(items = items.len()))]
pub fn run(items: &[KnapsackItem], capacity: f64) -> Vec<Step> {
  let mut rec = StepRecorder::for_ids(items.iter().map(|i| i.id.as_str()));
  let mut selected: Vec<SelectedItem> = Vec::new();
  let mut total = 0.0;
  let mut remaining = capacity;

  let step = rec
    .snapshot(format!(
      "Unsorted items: {} (capacity {})",
      describe_order(&items.iter().collect::<Vec<_>>()),
      capacity
    ))
    .with_knapsack(total, selected.clone());
  rec.push(step);

  let sorted = by_ratio(items);
  let step = rec
    .snapshot(format!(
      "Sorted by value/weight ratio: {}",
      describe_order(&sorted)
    ))
    .with_knapsack(total, selected.clone());
  rec.push(step);

  for item in sorted {
    let ratio = item.ratio();
    let (fraction, description) = if item.weight <= remaining {
      remaining -= item.weight;
      rec.set_node(&item.id, NodeStatus::Finalized);
      (
        1.0,
        format!(
          "Take all of {} (weight {}, value {}), remaining capacity {}",
          item.id, item.weight, item.value, remaining
        ),
      )
    } else if remaining > 0.0 {
      let fraction = remaining / item.weight;
      remaining = 0.0;
      rec.set_node(&item.id, NodeStatus::Finalized);
      (
        fraction,
        format!(
          "Take {:.3} of {} (value {:.2}), knapsack is now full",
          fraction,
          item.id,
          item.value * fraction
        ),
      )
    } else {
      rec.set_node(&item.id, NodeStatus::Rejected);
      (
        0.0,
        format!("Reject {}: knapsack is full", item.id),
      )
    };
    total += item.value * fraction;
    selected.push(SelectedItem {
      id: item.id.clone(),
      value: item.value,
      weight: item.weight,
      ratio,
      fraction,
    });
    let step = rec
      .snapshot(description)
      .with_current_node(item.id.as_str())
      .with_knapsack(total, selected.clone());
    rec.push(step);
  }

  let step = rec
    .snapshot(format!("Knapsack complete: total value {:.2}", total))
    .with_knapsack(total, selected);
  rec.push(step);

  debug!(steps = rec.len(), total, "knapsack trace complete");
  rec.finish()
}
