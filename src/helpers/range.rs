use common::YearRange;
use model::MspDataset;

/// Helper function to resolve the selected year range from query
/// parameters, defaulting omitted bounds to the dataset's bounds (the
/// slider's full extent).
pub fn resolve_year_range(
    start_year: Option<i32>,
    end_year: Option<i32>,
    dataset: &MspDataset,
) -> YearRange {
    YearRange::new(
        start_year.unwrap_or_else(|| dataset.year_min()),
        end_year.unwrap_or_else(|| dataset.year_max()),
    )
}
