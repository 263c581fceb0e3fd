use std::env;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn main() {
    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let is_optimized = opt_level != "0";

    let version = if is_optimized {
        match git(&["status", "--porcelain"]) {
            Some(status) => {
                let commit = git(&["rev-parse", "HEAD"]).unwrap_or_else(|| "Unknown commit".into());
                if status.is_empty() {
                    commit
                } else {
                    println!("cargo:warning=Uncommitted files exist");
                    format!("{}-dirty", commit.trim())
                }
            }
            None => "Release build (no git)".into(),
        }
    } else {
        "Development build".into()
    };

    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
