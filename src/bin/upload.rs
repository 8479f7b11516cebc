//! One-shot uploader for the portfolio dataset.
//!
//! Validates a local JSON file against the dataset shape the terminal
//! consumes, then PUTs it to the backing store as the single `portfolio`
//! document — the same document the terminal GETs at boot.
//!
//! ```text
//! upload --data assets/data/portfolio.json --endpoint https://...  [--dry-run]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use serde::Serialize;

    use termfolio::models::PortfolioData;

    #[derive(Parser, Debug)]
    #[command(name = "upload", about = "Upload the portfolio dataset to the backing store")]
    pub struct Args {
        /// Path to the dataset JSON file.
        #[arg(long, default_value = "assets/data/portfolio.json")]
        pub data: PathBuf,

        /// Store base URL; the dataset is PUT under it as `portfolio.json`.
        #[arg(long)]
        pub endpoint: String,

        /// Validate and report without sending anything.
        #[arg(long)]
        pub dry_run: bool,
    }

    pub async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(&args.data)?;
        let data: PortfolioData = serde_json::from_str(&raw)?;

        if data.bio.name.is_empty() {
            return Err("dataset has an empty bio.name".into());
        }

        let client = reqwest::Client::new();
        let endpoint = args.endpoint.trim_end_matches('/');

        put_doc(&client, endpoint, "portfolio", &data, args.dry_run).await?;

        println!("done");
        Ok(())
    }

    async fn put_doc<T: Serialize>(
        client: &reqwest::Client,
        endpoint: &str,
        path: &str,
        doc: &T,
        dry_run: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if dry_run {
            println!("would upload {path}");
            return Ok(());
        }

        let url = format!("{endpoint}/{path}.json");
        let response = client.put(&url).json(doc).send().await?;
        if !response.status().is_success() {
            return Err(format!("upload of {path} failed: HTTP {}", response.status()).into());
        }
        println!("uploaded {path}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    native::run(native::Args::parse()).await
}


#[cfg(target_arch = "wasm32")]
fn main() {}
