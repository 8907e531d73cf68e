use anyhow::{Context as _, Result};
use sieve_query::{CompileOptions, JoinMode};

use crate::Args;

/// Compile options from `--config` (if given), overridden by flags.
pub fn load(args: &Args) -> Result<CompileOptions> {
    let mut options = if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        toml_edit::de::from_str::<CompileOptions>(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?
    } else {
        CompileOptions::default()
    };

    if args.ellipsis {
        options.ellipsis_holes = true;
    }
    if args.any_piece {
        options.join = JoinMode::AnyPiece;
    }

    tracing::debug!(?options, "compile options");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    fn args_with_config(config: &std::path::Path, flags: &[&str]) -> Args {
        let mut argv = vec!["sieve", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(flags);
        argv.extend_from_slice(&["compile", "x"]);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn file_options_and_flag_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(&path, "join = \"ordered\"\nellipsis-holes = true\n").unwrap();

        let options = load(&args_with_config(&path, &[])).unwrap();
        assert!(options.ellipsis_holes);
        assert_eq!(options.join, JoinMode::Ordered);

        let options = load(&args_with_config(&path, &["--any-piece"])).unwrap();
        assert!(options.ellipsis_holes);
        assert_eq!(options.join, JoinMode::AnyPiece);
    }

    #[test]
    fn no_config_file() {
        let args = Args::try_parse_from(["sieve", "--ellipsis", "compile", "x"]).unwrap();
        let options = load(&args).unwrap();
        assert!(options.ellipsis_holes);
        assert_eq!(options.join, JoinMode::Ordered);
    }

    #[test]
    fn bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sieve.toml");
        std::fs::write(&path, "ellipsis = true\n").unwrap();
        let err = load(&args_with_config(&path, &[])).unwrap_err();
        assert!(err.to_string().starts_with("invalid config file"), "{err}");

        let missing = dir.path().join("missing.toml");
        let err = load(&args_with_config(&missing, &[])).unwrap_err();
        assert!(err.to_string().starts_with("cannot read config file"), "{err}");
    }
}
