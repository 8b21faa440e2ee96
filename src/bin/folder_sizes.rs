use std::path::PathBuf;

use log::debug;
use sdict::folder::FolderReport;

fn main() -> std::io::Result<()> {
    env_logger::builder().init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    debug!("analyzing {}", path.display());

    let report = FolderReport::new(&path)?;

    println!("Folder: {}", report.path.display());
    println!("Size:   {} bytes", report.size);

    match &report.parent {
        Some(parent) => println!("Up:     {}", parent.display()),
        None => println!("Up:     (none)"),
    }

    for folder in &report.subfolders {
        println!("  {}", folder.display());
    }

    Ok(())
}
