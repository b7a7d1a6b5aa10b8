use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clonable_codegen::{derive_targets, expand_derive};

/// What `#[derive(Clonable)]` produces for every deriving type in `source`.
/// Returns the rendered expansions and the number of types that failed.
pub fn render(source: &str) -> Result<(String, usize)> {
    let file = syn::parse_file(source).context("source is not valid Rust")?;

    let mut pieces = Vec::new();
    let mut failed = 0;

    for input in derive_targets(&file) {
        match expand_derive(&input) {
            Ok(expansion) => {
                pieces.push(format!("// {}\n{}", expansion.record(), expansion.to_source()));
            }
            Err(e) => {
                log::error!("{} failed ({}): {}", input.ident, e.kind(), e);
                failed += 1;
            }
        }
    }

    if pieces.is_empty() && failed == 0 {
        log::warn!("no #[derive(Clonable)] found");
    }

    Ok((pieces.join("\n"), failed))
}

pub fn run(path: &Path) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let (output, failed) =
        render(&source).with_context(|| format!("failed to expand {}", path.display()))?;

    print!("{}", output);

    if failed > 0 {
        bail!("{} type(s) in {} could not be expanded", failed, path.display());
    }
    Ok(())
}
