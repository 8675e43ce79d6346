//! Build script for storefront crate.
//!
//! Generates content-based hashes for static assets (CSS and JS) to enable
//! immutable CDN caching.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");

    hash_asset(&static_dir, "css", "main", "CSS_HASH");
    hash_asset(&static_dir, "js", "storefront", "JS_HASH");
}

/// Hash `static/<kind>/<stem>.<kind>` and copy it to `static/<kind>/derived`
/// with the hash in its filename.
///
/// Sets `env_key` for use with `env!(...)` in the crate.
fn hash_asset(static_dir: &Path, kind: &str, stem: &str, env_key: &str) {
    let source = static_dir.join(kind).join(format!("{stem}.{kind}"));

    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {}: {e}", source.display());
            println!("cargo:rustc-env={env_key}=");
            return;
        }
    };

    // First 8 chars of SHA256
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = &hash[..8];

    println!("cargo:rustc-env={env_key}={short_hash}");

    let derived_dir = static_dir.join(kind).join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived asset directory");

    let derived_path = derived_dir.join(format!("{stem}.{short_hash}.{kind}"));
    fs::copy(&source, &derived_path).expect("Failed to copy asset to derived directory");
}
