use std::fmt::{self, Display};

use crate::aggregate::{
    self, monthly_sales, most_popular_items, overall_most_popular, revenue_leaders, total_sales,
};
use crate::error::ReportError;
use crate::month::MonthLabel;
use crate::orders::{order_statistics, OrderStats};
use crate::records::Transaction;

/// Everything a single run produces, in print order. `order_focus` is the
/// item the order statistics were computed for; it is absent only when the
/// input had no transactions at all.
pub struct SalesReport {
    pub total_sales: f64,
    pub monthly_sales: Vec<(MonthLabel, f64)>,
    pub popular_items: Vec<(MonthLabel, aggregate::ItemTally)>,
    pub revenue_leaders: Vec<(MonthLabel, aggregate::RevenueTally)>,
    pub order_focus: Option<String>,
    pub order_statistics: Vec<(MonthLabel, OrderStats)>,
}

/// Runs the aggregators in report order over one immutable record set.
/// The first failure aborts the whole build; nothing is printed for a
/// partial run.
pub fn build_report(records: &[Transaction]) -> Result<SalesReport, ReportError> {
    let total_sales = total_sales(records);
    let monthly_sales = monthly_sales(records)?;
    let popular_items = most_popular_items(records)?;
    let revenue_leaders = revenue_leaders(records)?;

    let order_focus = overall_most_popular(&popular_items).map(|tally| tally.name.clone());
    let order_statistics = match &order_focus {
        Some(item) => order_statistics(records, item)?,
        None => Vec::new(),
    };

    Ok(SalesReport {
        total_sales,
        monthly_sales,
        popular_items,
        revenue_leaders,
        order_focus,
        order_statistics,
    })
}

impl Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Sales: ${}", self.total_sales)?;

        writeln!(f, "Month-wise Sales Totals:")?;
        for (month, sales) in &self.monthly_sales {
            writeln!(f, "{}: ${}", month, sales)?;
        }

        writeln!(f, "Most Popular Item in Each Month:")?;
        for (month, item) in &self.popular_items {
            writeln!(f, "{}: {} (Quantity: {})", month, item.name, item.quantity)?;
        }

        writeln!(f, "Items Generating Most Revenue in Each Month:")?;
        for (month, item) in &self.revenue_leaders {
            writeln!(
                f,
                "Month: {} Item Name: {} Revenue: ${}",
                month, item.item, item.revenue
            )?;
        }

        if let Some(item) = &self.order_focus {
            writeln!(f, "Order Statistics for Most Popular Item ({}):", item)?;
            for (month, stats) in &self.order_statistics {
                writeln!(
                    f,
                    "{}: Min: {} | Max: {} | Avg: {}",
                    month, stats.min_orders, stats.max_orders, stats.avg_orders
                )?;
            }
        }

        Ok(())
    }
}
