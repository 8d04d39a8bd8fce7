//! Download of the dataset snapshot.

use cid_db::Database;
use log::info;

/// Fetch the long-form CSV from `url`, check that it loads, and write it
/// to `output`.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching {}", url);
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("Bad response for {}: {}", url, response.status());
    }
    let body = response.text().await?;

    let db = Database::new()?;
    let summary = db.load_indicators(&body)?;
    info!(
        "Fetched {} bytes: {} values loaded, {} rows skipped",
        body.len(),
        summary.loaded,
        summary.skipped
    );

    write_snapshot(output, &body).await?;
    info!("Snapshot written to {}", output);
    Ok(())
}

/// Write `body` to `output`, creating missing parent directories.
async fn write_snapshot(output: &str, body: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(output, body).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("cid-fetch-{}", std::process::id()));
        let output = dir.join("nested").join("country_indicators.csv");
        let body = "Country Name,Indicator Name,Year,Value\nChile,GDP growth (annual %),1962,4.7\n";

        write_snapshot(output.to_str().unwrap(), body).await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&output).await.unwrap(), body);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
