use crate::error::ReportError;
use crate::month::MonthLabel;
use crate::records::Transaction;

/// Running quantity for one item inside a single month's scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTally {
    pub name: String,
    pub quantity: u32,
}

/// Running revenue for one item inside a single month's scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueTally {
    pub item: String,
    pub revenue: f64,
}

/**
 * Month buckets live in a Vec rather than a map so that the report comes
 * out in first-seen order, matching the order months appear in the input
 * stream. Three entries at most, so the linear scan costs nothing.
 */
pub(crate) fn month_bucket<T: Default>(
    buckets: &mut Vec<(MonthLabel, T)>,
    month: MonthLabel,
) -> &mut T {
    if let Some(position) = buckets.iter().position(|(label, _)| *label == month) {
        &mut buckets[position].1
    } else {
        buckets.push((month, T::default()));
        let last = buckets.len() - 1;
        &mut buckets[last].1
    }
}

/// Sum of every record's total, months ignored.
pub fn total_sales(records: &[Transaction]) -> f64 {
    records.iter().fold(0.0, |total, record| total + record.total)
}

pub fn monthly_sales(records: &[Transaction]) -> Result<Vec<(MonthLabel, f64)>, ReportError> {
    let mut sales: Vec<(MonthLabel, f64)> = Vec::new();
    for record in records {
        let month = MonthLabel::resolve(&record.date)?;
        *month_bucket(&mut sales, month) += record.total;
    }
    Ok(sales)
}

/// Per month, the item with the highest cumulative quantity. The running
/// best is only replaced on a strictly greater quantity, so on a tie the
/// first item to reach the max keeps it.
pub fn most_popular_items(
    records: &[Transaction],
) -> Result<Vec<(MonthLabel, ItemTally)>, ReportError> {
    let mut tallies: Vec<(MonthLabel, Vec<ItemTally>)> = Vec::new();
    for record in records {
        let month = MonthLabel::resolve(&record.date)?;
        let month_tallies = month_bucket(&mut tallies, month);
        match month_tallies.iter_mut().find(|tally| tally.name == record.item) {
            Some(tally) => tally.quantity += record.quantity,
            None => month_tallies.push(ItemTally {
                name: record.item.clone(),
                quantity: record.quantity,
            }),
        }
    }

    let mut popular = Vec::new();
    for (month, items) in tallies {
        let mut best = ItemTally {
            name: String::new(),
            quantity: 0,
        };
        for item in items {
            if item.quantity > best.quantity {
                best = item;
            }
        }
        popular.push((month, best));
    }
    Ok(popular)
}

/// Per month, the item with the highest cumulative revenue. Same shape and
/// tie-break as the popularity pass, keyed by summed totals instead.
pub fn revenue_leaders(
    records: &[Transaction],
) -> Result<Vec<(MonthLabel, RevenueTally)>, ReportError> {
    let mut tallies: Vec<(MonthLabel, Vec<RevenueTally>)> = Vec::new();
    for record in records {
        let month = MonthLabel::resolve(&record.date)?;
        let month_tallies = month_bucket(&mut tallies, month);
        match month_tallies.iter_mut().find(|tally| tally.item == record.item) {
            Some(tally) => tally.revenue += record.total,
            None => month_tallies.push(RevenueTally {
                item: record.item.clone(),
                revenue: record.total,
            }),
        }
    }

    let mut leaders = Vec::new();
    for (month, items) in tallies {
        let mut best = RevenueTally {
            item: String::new(),
            revenue: 0.0,
        };
        for item in items {
            if item.revenue > best.revenue {
                best = item;
            }
        }
        leaders.push((month, best));
    }
    Ok(leaders)
}

/// Pick the single item the order-statistics report focuses on: the
/// per-month winner with the numerically highest quantity, earliest month
/// winning ties.
pub fn overall_most_popular(popular: &[(MonthLabel, ItemTally)]) -> Option<&ItemTally> {
    let mut best: Option<&ItemTally> = None;
    for (_, tally) in popular {
        let replace = match best {
            None => true,
            Some(current) => tally.quantity > current.quantity,
        };
        if replace {
            best = Some(tally);
        }
    }
    best
}
