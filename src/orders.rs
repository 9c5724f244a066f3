use crate::aggregate::month_bucket;
use crate::error::ReportError;
use crate::month::{day_part, MonthLabel};
use crate::records::Transaction;

/// Per-month order-count statistics for one item. `avg_orders` carries the
/// plain sum of the day counts, not a mean; the reports this generator
/// replaces always printed the sum under the "Avg" heading and consumers
/// reconcile against that number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    pub min_orders: u32,
    pub max_orders: u32,
    pub avg_orders: u32,
}

/**
 * Two-level grouping: count the item's transactions per calendar day, then
 * fold the day counts per month. The month comes from the full transaction
 * date, so day 1 of January and day 1 of February land in separate buckets.
 */
pub fn order_statistics(
    records: &[Transaction],
    item: &str,
) -> Result<Vec<(MonthLabel, OrderStats)>, ReportError> {
    let mut day_counts: Vec<(MonthLabel, Vec<(String, u32)>)> = Vec::new();
    for record in records.iter().filter(|record| record.item == item) {
        let month = MonthLabel::resolve(&record.date)?;
        let day = day_part(&record.date);
        let days = month_bucket(&mut day_counts, month);
        match days.iter_mut().find(|(existing, _)| existing.as_str() == day) {
            Some((_, count)) => *count += 1,
            None => days.push((day.to_string(), 1)),
        }
    }

    let mut report = Vec::new();
    for (month, days) in day_counts {
        let mut stats = OrderStats {
            min_orders: u32::MAX,
            max_orders: u32::MIN,
            avg_orders: 0,
        };
        for (_, count) in days {
            stats.min_orders = stats.min_orders.min(count);
            stats.max_orders = stats.max_orders.max(count);
            stats.avg_orders += count;
        }
        report.push((month, stats));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(date: &str, item: &str) -> Transaction {
        Transaction {
            date: date.to_string(),
            item: item.to_string(),
            unit_price: 1.0,
            quantity: 1,
            total: 1.0,
        }
    }

    #[test]
    fn counts_orders_per_day_then_folds_per_month() {
        // Widget twice on day 1, once on day 2, all January.
        let records = vec![
            order("1/1/2023", "Widget"),
            order("1/1/2023", "Widget"),
            order("2/1/2023", "Widget"),
        ];
        let report = order_statistics(&records, "Widget").unwrap();
        assert_eq!(
            report,
            vec![(
                MonthLabel::January,
                OrderStats {
                    min_orders: 1,
                    max_orders: 2,
                    avg_orders: 3,
                }
            )]
        );
    }

    #[test]
    fn other_items_are_ignored() {
        let records = vec![
            order("1/1/2023", "Widget"),
            order("1/1/2023", "Gadget"),
            order("1/1/2023", "Gadget"),
        ];
        let report = order_statistics(&records, "Widget").unwrap();
        assert_eq!(report[0].1.max_orders, 1);
        assert_eq!(report[0].1.avg_orders, 1);
    }

    #[test]
    fn same_day_number_in_different_months_stays_separate() {
        let records = vec![
            order("1/1/2023", "Widget"),
            order("1/1/2023", "Widget"),
            order("1/2/2023", "Widget"),
        ];
        let report = order_statistics(&records, "Widget").unwrap();
        assert_eq!(
            report,
            vec![
                (
                    MonthLabel::January,
                    OrderStats {
                        min_orders: 2,
                        max_orders: 2,
                        avg_orders: 2,
                    }
                ),
                (
                    MonthLabel::February,
                    OrderStats {
                        min_orders: 1,
                        max_orders: 1,
                        avg_orders: 1,
                    }
                ),
            ]
        );
    }

    #[test]
    fn item_with_no_orders_yields_an_empty_report() {
        let records = vec![order("1/1/2023", "Widget")];
        let report = order_statistics(&records, "Gizmo").unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn out_of_window_date_aborts_the_pass() {
        let records = vec![order("1/6/2023", "Widget")];
        assert!(matches!(
            order_statistics(&records, "Widget"),
            Err(ReportError::MonthOutOfWindow(_))
        ));
    }
}
