//! Portfolio dataset loading.
//!
//! The remote store is authoritative but optional: any fetch failure falls
//! back to the embedded dataset, and sections the remote document leaves
//! empty are filled from it as well. The terminal never starts without data.

use crate::config;
use crate::models::PortfolioData;
use crate::utils::fetch;

pub async fn load_portfolio() -> PortfolioData {
    match fetch::fetch_json::<PortfolioData>(config::DATA_URL).await {
        Ok(remote) => remote.merged_with(config::fallback_data()),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("portfolio fetch failed ({err}), using embedded dataset").into(),
            );
            config::fallback_data()
        }
    }
}
