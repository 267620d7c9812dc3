use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Where the commands are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Parses the input arguments: an optional commands file, where `-` or no argument at all means
/// stdin
pub fn parse_input_arg() -> Result<InputSource> {
    parse_args(env::args().skip(1))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<InputSource> {
    let source = match args.next() {
        None => InputSource::Stdin,
        Some(arg) if arg == "-" => InputSource::Stdin,
        Some(filename) => {
            let path = fs::canonicalize(&filename)
                .with_context(|| InputArgsError::FileNotFound(filename.clone()))?;

            InputSource::File(path)
        }
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!(
            "Expected at most one input file, found extra argument {extra:?}"
        )))?
    }

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn stdin_by_default() {
        assert_eq!(parse_args(args(&[])).unwrap(), InputSource::Stdin);
        assert_eq!(parse_args(args(&["-"])).unwrap(), InputSource::Stdin);
    }

    #[test]
    fn existing_file() {
        let source = parse_args(args(&["Cargo.toml"])).unwrap();

        assert!(matches!(source, InputSource::File(path) if path.ends_with("Cargo.toml")));
    }

    #[test]
    fn missing_file() {
        let err = parse_args(args(&["does/not/exist.csv"])).unwrap_err();

        assert!(err.to_string().contains("does/not/exist.csv"));
    }

    #[test]
    fn too_many_args() {
        assert!(parse_args(args(&["-", "extra"])).is_err());
    }
}
