//! Report output in JSON and CSV
//!
//! - JSON: a pretty-printed array of [`SellerReport`] objects, money as numbers
//! - CSV: one row per seller with columns
//!   `rank,seller_id,name,revenue,profit,sales_count,bonus,top_products`,
//!   where `top_products` is `sku:quantity` pairs joined by `;`
//!
//! Rows are written in leaderboard order; nothing is re-sorted here.

use crate::types::{AnalysisError, SellerReport, TopProduct};
use std::io::Write;

/// Write reports as a JSON array followed by a newline
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(&mut *output, reports)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Write reports as CSV, one row per seller
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "rank",
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "bonus",
        "top_products",
    ])?;

    for (rank, report) in reports.iter().enumerate() {
        writer.write_record(&[
            (rank + 1).to_string(),
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.2}", report.revenue),
            format!("{:.2}", report.profit),
            report.sales_count.to_string(),
            format!("{:.2}", report.bonus),
            format_top_products(&report.top_products),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn format_top_products(top_products: &[TopProduct]) -> String {
    top_products
        .iter()
        .map(|product| format!("{}:{}", product.sku, product.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn report(seller_id: &str, name: &str, profit: &str, top: &[(&str, u64)]) -> SellerReport {
        SellerReport {
            seller_id: seller_id.to_string(),
            name: name.to_string(),
            revenue: Decimal::from_str("1000.5").unwrap(),
            profit: Decimal::from_str(profit).unwrap(),
            sales_count: 4,
            top_products: top
                .iter()
                .map(|(sku, quantity)| TopProduct {
                    sku: sku.to_string(),
                    quantity: *quantity,
                    product_name: format!("Name of {}", sku),
                    category: "General".to_string(),
                })
                .collect(),
            bonus: Decimal::from_str("15").unwrap(),
        }
    }

    #[test]
    fn test_write_csv() {
        let reports = vec![
            report("seller_1", "Ivan Ivanov", "100", &[("SKU_001", 5), ("SKU_002", 2)]),
            report("seller_2", "Petrov, Petr", "50.1", &[]),
        ];
        let mut output = Vec::new();

        write_reports_csv(&reports, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "rank,seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
             1,seller_1,Ivan Ivanov,1000.50,100.00,4,15.00,SKU_001:5;SKU_002:2\n\
             2,seller_2,\"Petrov, Petr\",1000.50,50.10,4,15.00,\n"
        );
    }

    #[test]
    fn test_write_json_round_trips_values() {
        let reports = vec![report("seller_1", "Ivan Ivanov", "100.25", &[("SKU_001", 5)])];
        let mut output = Vec::new();

        write_reports_json(&reports, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.ends_with("]\n"));
        let value: serde_json::Value = serde_json::from_str(&output_str).unwrap();
        assert_eq!(value[0]["seller_id"], "seller_1");
        assert_eq!(value[0]["profit"], serde_json::json!(100.25));
        assert_eq!(value[0]["top_products"][0]["product_name"], "Name of SKU_001");

        let parsed: Vec<SellerReport> = serde_json::from_str(&output_str).unwrap();
        assert_eq!(parsed, reports);
    }

    #[test]
    fn test_write_empty_json() {
        let mut output = Vec::new();
        write_reports_json(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }
}
