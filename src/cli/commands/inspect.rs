use anyhow::Result;
use tracing::info;

use compute::{commodity_slice, summarize};
use model::MspDataset;

/// Loads the dataset and prints per-commodity coverage and headline
/// statistics over the full year range.
pub fn inspect(data_path: &str) -> Result<()> {
    info!("Inspecting MSP dataset at: {}", data_path);
    let dataset = MspDataset::from_path(data_path)?;

    println!("records:     {}", dataset.len());
    println!(
        "years:       {} ..= {}",
        dataset.year_min(),
        dataset.year_max()
    );
    println!("commodities: {}", dataset.commodities().len());
    println!();

    for name in dataset.commodities() {
        let slice = commodity_slice(&dataset, name, dataset.year_min(), dataset.year_max())?;
        let summary = summarize(&slice);
        println!(
            "  {:<28} {:>2} obs   latest {:>8.0}   avg {:>8.1}   growth {:>7.2}%",
            name,
            slice.len(),
            summary.latest_price,
            summary.average_price,
            summary.growth_pct
        );
    }

    Ok(())
}
