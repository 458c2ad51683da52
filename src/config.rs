use std::{
    fs::read,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::args::Args;

/// Paths as given in a config file.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let bytes =
            read(path).with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        let base = path.parent().unwrap_or(Path::new(""));
        for field in [&mut config.source, &mut config.template, &mut config.output] {
            if let Some(p) = field {
                *p = base.join(&*p);
            }
        }
        Ok(config)
    }
}

/// Fully resolved inputs of an embed run.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct EmbedPaths {
    pub(crate) source: PathBuf,
    pub(crate) template: PathBuf,
    pub(crate) output: PathBuf,
}

impl EmbedPaths {
    /// Combines command line paths with those of the config file. The command
    /// line wins.
    pub(crate) fn resolve(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        Ok(Self {
            source: pick(&args.source, config.source, "source")?,
            template: pick(&args.template, config.template, "template")?,
            output: pick(&args.output, config.output, "output")?,
        })
    }
}

fn pick(arg: &Option<PathBuf>, config: Option<PathBuf>, key: &str) -> Result<PathBuf> {
    arg.clone()
        .or(config)
        .ok_or_else(|| anyhow!("missing {key} path: pass --{key} or set \"{key}\" in the config file"))
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("static-embed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn uses_command_line_paths() {
        let args = parse(&["-s", "static", "-t", "plugin-template.go", "-o", "../out.go"]);

        assert_eq!(
            EmbedPaths::resolve(&args).unwrap(),
            EmbedPaths {
                source: "static".into(),
                template: "plugin-template.go".into(),
                output: "../out.go".into(),
            }
        );
    }

    #[test]
    fn config_paths_are_relative_to_config_file() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("embed.json");
        write(
            &config,
            r#"{"source": "static", "template": "plugin-template.go", "output": "../out.go"}"#,
        )
        .unwrap();
        let args = parse(&["--config", config.to_str().unwrap()]);

        assert_eq!(
            EmbedPaths::resolve(&args).unwrap(),
            EmbedPaths {
                source: dir.path().join("static"),
                template: dir.path().join("plugin-template.go"),
                output: dir.path().join("../out.go"),
            }
        );
    }

    #[test]
    fn command_line_overrides_config() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("embed.json");
        write(
            &config,
            r#"{"source": "static", "template": "t.go", "output": "o.go"}"#,
        )
        .unwrap();
        let args = parse(&["-c", config.to_str().unwrap(), "-o", "/tmp/elsewhere.go"]);

        let paths = EmbedPaths::resolve(&args).unwrap();

        assert_eq!(paths.source, dir.path().join("static"));
        assert_eq!(paths.output, PathBuf::from("/tmp/elsewhere.go"));
    }

    #[test]
    fn absolute_config_path_is_kept() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("embed.json");
        let absolute = dir.path().join("assets");
        write(
            &config,
            serde_json::json!({"source": absolute, "template": "t.go", "output": "o.go"})
                .to_string(),
        )
        .unwrap();
        let args = parse(&["-c", config.to_str().unwrap()]);

        assert_eq!(EmbedPaths::resolve(&args).unwrap().source, absolute);
    }

    #[test]
    fn missing_path_names_flag() {
        let args = parse(&["-s", "static", "-t", "t.go"]);

        let err = EmbedPaths::resolve(&args).unwrap_err();

        assert!(err.to_string().contains("--output"), "{err}");
    }

    #[test]
    fn rejects_unknown_config_keys() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("embed.json");
        write(&config, r#"{"sources": "static"}"#).unwrap();
        let args = parse(&["-c", config.to_str().unwrap()]);

        let err = EmbedPaths::resolve(&args).unwrap_err();

        assert!(format!("{err:#}").contains("failed to parse config"), "{err:#}");
    }

    #[test]
    fn missing_config_file_fails() {
        let dir = tempdir().unwrap();
        let args = parse(&["-c", dir.path().join("absent.json").to_str().unwrap()]);

        assert!(EmbedPaths::resolve(&args).is_err());
    }
}
