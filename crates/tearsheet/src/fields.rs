//! Declarative field maps for the display tables.
//!
//! Each display table is defined as a list of [`FieldSpec`]s: the display
//! column name, the statement line item it is sourced from, and whether the
//! item is required. A missing required item is fatal for that table; a
//! missing optional item just omits the column.

/// One display column of a shaped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name in the shaped table.
    pub display: &'static str,
    /// Line-item label in the source statement.
    pub source: &'static str,
    /// Whether the line item must be present.
    pub required: bool,
}

impl FieldSpec {
    const fn required(display: &'static str, source: &'static str) -> Self {
        Self {
            display,
            source,
            required: true,
        }
    }

    const fn optional(display: &'static str, source: &'static str) -> Self {
        Self {
            display,
            source,
            required: false,
        }
    }
}

/// Income statement summary: the core profitability view.
pub const FINANCIAL_SUMMARY: &[FieldSpec] = &[
    FieldSpec::required("Net Income", "Net Income"),
    FieldSpec::required("Revenue", "Total Revenue"),
    FieldSpec::required("Operating Income", "Operating Income"),
    FieldSpec::required("Operating Expenses", "Operating Expense"),
];

/// Balance sheet summary.
pub const BALANCE_SHEET_SUMMARY: &[FieldSpec] = &[
    FieldSpec::required("Total Assets", "Total Assets"),
    FieldSpec::required("Total Liabilities", "Total Liabilities Net Minority Interest"),
    FieldSpec::required("Total Equity", "Total Equity Gross Minority Interest"),
    FieldSpec::required("Cash", "Cash And Cash Equivalents"),
];

/// Cash flow summary.
pub const CASH_FLOW_SUMMARY: &[FieldSpec] = &[
    FieldSpec::required("Operating Cash Flow", "Operating Cash Flow"),
    FieldSpec::required("Investing Cash Flow", "Investing Cash Flow"),
    FieldSpec::required("Financing Cash Flow", "Financing Cash Flow"),
    FieldSpec::required("Free Cash Flow", "Free Cash Flow"),
];

/// Expense breakdown. Every column is conditional on the issuer reporting
/// the line item.
pub const EXPENSE_BREAKDOWN: &[FieldSpec] = &[
    FieldSpec::optional("Cost of Revenue", "Cost Of Revenue"),
    FieldSpec::optional("Research Development", "Research And Development"),
    FieldSpec::optional("SG&A Expense", "Selling General And Administration"),
    FieldSpec::optional("Marketing Expense", "Marketing Expense"),
    FieldSpec::optional("Operating Expenses", "Operating Expense"),
];

/// Revenue by region. Rarely reported as statement line items, so every
/// column is conditional.
pub const GEO_REVENUE: &[FieldSpec] = &[
    FieldSpec::optional("North America", "North America Revenue"),
    FieldSpec::optional("Europe", "Europe Revenue"),
    FieldSpec::optional("Asia Pacific", "Asia Pacific Revenue"),
    FieldSpec::optional("Rest of World", "Rest Of World Revenue"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::financial(FINANCIAL_SUMMARY)]
    #[case::balance_sheet(BALANCE_SHEET_SUMMARY)]
    #[case::cash_flow(CASH_FLOW_SUMMARY)]
    fn test_mandatory_maps_are_fully_required(#[case] fields: &[FieldSpec]) {
        assert!(fields.iter().all(|f| f.required));
        assert_eq!(fields.len(), 4);
    }

    #[rstest]
    #[case::expenses(EXPENSE_BREAKDOWN)]
    #[case::geo_revenue(GEO_REVENUE)]
    fn test_optional_maps_are_fully_optional(#[case] fields: &[FieldSpec]) {
        assert!(fields.iter().all(|f| !f.required));
    }
}
