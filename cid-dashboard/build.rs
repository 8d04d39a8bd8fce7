use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("country_indicators.csv");

    // Snapshot used when the remote dataset cannot be fetched. Written by
    // `cid-cli fetch --output fixtures/country_indicators.csv`.
    let snapshot = Path::new("../fixtures/country_indicators.csv");
    if snapshot.exists() {
        fs::copy(snapshot, &dest).unwrap();
    } else {
        fs::write(&dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/country_indicators.csv");
}
