//! Stamps the source revision into `cardparse --version`.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const REVISION_VAR: &str = "CARDPARSE_BUILD_SHA";

fn git_revision(workspace: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}

fn main() {
    println!("cargo:rerun-if-env-changed={REVISION_VAR}");

    // Source tarballs carry no .git; packagers pass the revision in instead
    let pinned = env::var(REVISION_VAR).ok().filter(|s| !s.trim().is_empty());

    let revision = pinned
        .or_else(|| {
            let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
            let workspace = manifest_dir.parent()?;
            println!("cargo:rerun-if-changed={}", workspace.join(".git/HEAD").display());
            git_revision(workspace)
        })
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={REVISION_VAR}={revision}");
}
