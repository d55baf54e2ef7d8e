//! Sales reports.
//!
//! Every figure here is a fixed placeholder; there is no reporting pipeline
//! behind it. The export reproduces the same placeholders as a JSON download.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const CURRENCY: &str = "SAR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Comprehensive,
    Daily,
    Weekly,
    Monthly,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Comprehensive,
        ReportKind::Daily,
        ReportKind::Weekly,
        ReportKind::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Comprehensive => "comprehensive",
            ReportKind::Daily => "daily",
            ReportKind::Weekly => "weekly",
            ReportKind::Monthly => "monthly",
        }
    }
}

impl core::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("kind must be one of: comprehensive, daily, weekly, monthly (got '{s}')")
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_sales: u64,
    pub total_products: u32,
    pub low_stock: u32,
    /// Percent.
    pub profit_margin: Decimal,
    pub sales_change: Decimal,
    pub product_change: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub sales: u64,
    pub profit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub rank: u32,
    pub name: String,
    pub units_sold: u32,
    pub revenue: u64,
}

/// Everything the reports page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsView {
    pub summary: ReportSummary,
    pub sales: Vec<MonthlySales>,
    pub categories: Vec<CategoryShare>,
    pub top_products: Vec<TopProduct>,
    pub kinds: Vec<ReportKind>,
}

/// Downloadable report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportExport {
    pub report_date: NaiveDate,
    pub report_kind: ReportKind,
    pub total_sales: String,
    pub product_count: u32,
    pub low_stock: u32,
    pub profit_margin: String,
    pub sales: Vec<MonthlySales>,
}

impl ReportExport {
    pub fn file_name(&self) -> String {
        format!(
            "report_{}_{}.json",
            self.report_kind.as_str(),
            self.report_date.format("%Y-%m-%d")
        )
    }
}

pub fn summary() -> ReportSummary {
    ReportSummary {
        total_sales: 125_000,
        total_products: 45,
        low_stock: 8,
        profit_margin: Decimal::new(235, 1),
        sales_change: Decimal::new(123, 1),
        product_change: Decimal::new(52, 1),
    }
}

pub fn monthly_sales() -> Vec<MonthlySales> {
    [
        ("Jan", 12_000, 2_400),
        ("Feb", 19_000, 3_800),
        ("Mar", 15_000, 3_000),
        ("Apr", 25_000, 5_000),
        ("May", 22_000, 4_400),
        ("Jun", 30_000, 6_000),
    ]
    .into_iter()
    .map(|(month, sales, profit)| MonthlySales {
        month: month.to_string(),
        sales,
        profit,
    })
    .collect()
}

pub fn category_shares() -> Vec<CategoryShare> {
    [("Electronics", 35), ("Clothing", 25), ("Books", 20), ("Other", 20)]
        .into_iter()
        .map(|(name, value)| CategoryShare {
            name: name.to_string(),
            value,
        })
        .collect()
}

pub fn top_products() -> Vec<TopProduct> {
    (1..=5u32)
        .map(|rank| TopProduct {
            rank,
            name: format!("Product {rank}"),
            units_sold: 50 - 8 * rank,
            revenue: u64::from(1000 - 150 * rank),
        })
        .collect()
}

pub fn view() -> ReportsView {
    ReportsView {
        summary: summary(),
        sales: monthly_sales(),
        categories: category_shares(),
        top_products: top_products(),
        kinds: ReportKind::ALL.to_vec(),
    }
}

pub fn export(kind: ReportKind, date: NaiveDate) -> ReportExport {
    let summary = summary();
    ReportExport {
        report_date: date,
        report_kind: kind,
        total_sales: format!("{} {CURRENCY}", group_thousands(summary.total_sales)),
        product_count: summary.total_products,
        low_stock: summary.low_stock,
        profit_margin: format!("{}%", summary.profit_margin),
        sales: monthly_sales(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_have_the_expected_shape() {
        let sales = monthly_sales();
        assert_eq!(sales.len(), 6);
        assert_eq!(sales[0].sales, 12_000);
        assert_eq!(sales[5].profit, 6_000);

        let shares: u32 = category_shares().iter().map(|c| c.value).sum();
        assert_eq!(shares, 100);
    }

    #[test]
    fn top_products_decline_with_rank() {
        let top = top_products();
        assert_eq!(top.len(), 5);
        assert_eq!((top[0].units_sold, top[0].revenue), (42, 850));
        assert_eq!((top[4].units_sold, top[4].revenue), (10, 250));
    }

    #[test]
    fn export_formats_figures_and_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let doc = export(ReportKind::Weekly, date);
        assert_eq!(doc.total_sales, "125,000 SAR");
        assert_eq!(doc.profit_margin, "23.5%");
        assert_eq!(doc.file_name(), "report_weekly_2024-03-09.json");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("Daily".parse::<ReportKind>(), Ok(ReportKind::Daily));
        assert!("yearly".parse::<ReportKind>().is_err());
    }
}
