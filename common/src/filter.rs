use crate::format::short_date;
use crate::order::Order;

/// Orders matching a search box query.
///
/// The id match ignores case. The date match is a plain substring test against
/// the rendered short date, so "3/7" finds March 7th but "2026-03-07" finds
/// nothing. An empty query keeps everything.
pub fn filter_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    if query.is_empty() {
        return orders.iter().collect();
    }
    let needle = query.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            order.id.0.to_lowercase().contains(&needle)
                || order
                    .created_at
                    .as_ref()
                    .is_some_and(|at| short_date(at).contains(query))
        })
        .collect()
}

/// Orders split by tracking state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    /// Paid, not yet delivered.
    pub pending: Vec<&'a Order>,
    /// Delivered, whatever the paid flag says.
    pub completed: Vec<&'a Order>,
}

/// Split orders into pending and completed.
///
/// Unpaid, undelivered orders belong to neither side and do not show up in
/// tracking or in the summary counts.
pub fn partition_by_state(orders: &[Order]) -> Partition<'_> {
    let mut partition = Partition::default();
    for order in orders {
        if order.is_delivered {
            partition.completed.push(order);
        } else if order.is_paid {
            partition.pending.push(order);
        }
    }
    partition
}
