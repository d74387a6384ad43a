//! Snapshot refresher: downloads the latest service tag file for every cloud
//! into `data/` and records the source file names in `data/files.json`.
//!
//! Run from the crate root before a release to update the bundled snapshots.

use azure_ip_networks::{AzureCloud, ServiceTagsDownloader};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");

    let target_dir: PathBuf = std::env::args().nth(1).unwrap_or_else(|| "data".into()).into();
    log::info!("#Start refresh-snapshots, target dir {}", target_dir.display());

    let downloader = ServiceTagsDownloader::new(reqwest::Client::new());
    let mut files: BTreeMap<String, String> = BTreeMap::new();

    for cloud in AzureCloud::ALL {
        let (url, bytes) = downloader.download(cloud).await?;
        let path = target_dir.join(format!("{cloud}.json"));
        tokio::fs::write(&path, &bytes).await?;
        log::info!(
            "wrote {len} bytes to {path} from {url}",
            len = bytes.len(),
            path = path.display(),
        );
        files.insert(cloud.to_string(), file_name_of(&url));
    }

    write_manifest(&target_dir, &files).await?;
    log::info!("Finished!");
    Ok(())
}

fn file_name_of(url: &str) -> String {
    Path::new(url)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| url.to_string())
}

async fn write_manifest(
    target_dir: &Path,
    files: &BTreeMap<String, String>,
) -> Result<(), Box<dyn Error>> {
    let manifest = serde_json::json!({
        "retrieved": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        "files": files,
    });
    let path = target_dir.join("files.json");
    tokio::fs::write(&path, serde_json::to_string_pretty(&manifest)?).await?;
    log::info!("wrote manifest {}", path.display());
    Ok(())
}
