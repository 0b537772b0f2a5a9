use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{ConfigPaths, Settings};
use crate::cli_args::Cli;

pub(crate) fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let dir = match cli.config_dir.clone() {
        Some(dir) => dir,
        None => default_config_dir()?,
    };
    Ok(Settings {
        paths: ConfigPaths { dir },
        origin: cli.origin.clone(),
        request_timeout: seconds(cli.timeout),
        auth_timeout: seconds(cli.auth_timeout),
    })
}

fn default_config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".config").join("pocket"))
}

fn seconds(value: u64) -> Option<Duration> {
    (value > 0).then(|| Duration::from_secs(value))
}

/// The flag (or env) wins over the file; only the file's first line counts.
pub(crate) fn resolve_consumer_key(
    arg: Option<&str>,
    paths: &ConfigPaths,
) -> anyhow::Result<String> {
    if let Some(key) = arg {
        let key = key.trim();
        if key.is_empty() {
            anyhow::bail!("consumer key is empty");
        }
        return Ok(key.to_string());
    }
    load_consumer_key(&paths.consumer_key())
}

pub(crate) fn load_consumer_key(path: &Path) -> anyhow::Result<String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => anyhow::bail!(
            "consumer key not found: pass --consumer-key or write it to {}",
            path.display()
        ),
        Err(err) => return Err(err.into()),
    };
    let key = contents.lines().next().unwrap_or_default().trim();
    if key.is_empty() {
        anyhow::bail!("consumer key file is empty: {}", path.display());
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn paths_in(dir: &Path) -> ConfigPaths {
        ConfigPaths {
            dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn consumer_key_uses_first_line_only() {
        let dir = tempdir().expect("tempdir");
        let paths = paths_in(dir.path());
        fs::write(paths.consumer_key(), "  1234-abcd \nsecond line\n").expect("write");
        assert_eq!(
            resolve_consumer_key(None, &paths).expect("key"),
            "1234-abcd"
        );
    }

    #[test]
    fn consumer_key_argument_takes_precedence() {
        let dir = tempdir().expect("tempdir");
        let paths = paths_in(dir.path());
        fs::write(paths.consumer_key(), "from-file").expect("write");
        assert_eq!(
            resolve_consumer_key(Some("from-flag"), &paths).expect("key"),
            "from-flag"
        );
        assert!(resolve_consumer_key(Some("  "), &paths).is_err());
    }

    #[test]
    fn missing_or_blank_consumer_key_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let paths = paths_in(dir.path());
        let err = resolve_consumer_key(None, &paths).expect_err("missing");
        assert!(err.to_string().contains("consumer key not found"));

        fs::write(paths.consumer_key(), "\n").expect("write");
        assert!(resolve_consumer_key(None, &paths).is_err());
    }

    #[test]
    fn zero_seconds_disables_a_timeout() {
        assert_eq!(seconds(0), None);
        assert_eq!(seconds(30), Some(Duration::from_secs(30)));
    }
}
