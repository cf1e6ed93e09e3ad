//! Demonstrates how to list the central directory of a ZIP file.
//!
//! ```sh
//! RUST_LOG=zip_cd=debug cargo run --example inspect -- archive.zip
//! ```

use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;
use zip_cd::{CentralDirectory, ZipEntry};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: inspect <archive.zip>");
    };

    let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
    let mut reader = BufReader::new(file);

    let Some(directory) = CentralDirectory::<ZipEntry>::try_read_from(&mut reader)? else {
        bail!("{path} does not hold a valid central directory");
    };

    for entry in &directory {
        let name = String::from_utf8_lossy(entry.filename());
        let kind = if entry.dir() { "dir " } else { "file" };
        let date = entry.last_modification_date();

        println!(
            "{kind} {:>10} {:>10} {:08x} {:04}-{:02}-{:02} {:02}:{:02} {name}",
            entry.compressed_size(),
            entry.uncompressed_size(),
            entry.crc32(),
            date.year(),
            date.month(),
            date.day(),
            date.hour(),
            date.minute(),
        );
    }

    println!("{} entries", directory.len());
    if !directory.comment().is_empty() {
        println!("comment: {}", String::from_utf8_lossy(directory.comment()));
    }

    Ok(())
}
