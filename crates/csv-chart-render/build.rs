// File: crates/csv-chart-render/build.rs
// Summary: Links advapi32 for Skia/ICU registry lookups when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Target, not host: cross builds to windows need the link too.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
