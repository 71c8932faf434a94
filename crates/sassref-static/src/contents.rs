//! Component and override names shipped in the library's Sass package.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static COMPONENT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@(?:import|forward) "(?P<name>[a-z-]*)/index";"#).unwrap()
});

static OVERRIDE_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@(?:import|forward) "(?P<name>[a-z-]*)";"#).unwrap());

/// Errors that can occur when reading package contents.
#[derive(Debug, thiserror::Error)]
pub enum ContentsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No matches found in {0}")]
    NoMatches(&'static str),
}

/// Components listed in `components/_index.scss`, in file order.
pub fn components(package_root: &Path) -> Result<Vec<String>, ContentsError> {
    let index = "components/_index.scss";
    let names = extract(&read(&package_root.join(index))?, &COMPONENT_IMPORT);

    if names.is_empty() {
        return Err(ContentsError::NoMatches(index));
    }
    Ok(names)
}

/// Overrides listed in `overrides/_index.scss`, in file order.
pub fn overrides(package_root: &Path) -> Result<Vec<String>, ContentsError> {
    let index = "overrides/_index.scss";
    let names = extract(&read(&package_root.join(index))?, &OVERRIDE_IMPORT);

    if names.is_empty() {
        return Err(ContentsError::NoMatches(index));
    }
    Ok(names)
}

fn read(path: &Path) -> Result<String, ContentsError> {
    fs::read_to_string(path).map_err(|source| ContentsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn extract(source: &str, pattern: &Regex) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| pattern.captures(line))
        .map(|caps| caps["name"].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_index(root: &Path, index: &str, content: &str) {
        let path = root.join(index);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn extracts_components() {
        let temp = tempdir().unwrap();
        write_index(
            temp.path(),
            "components/_index.scss",
            r#"@import "../base";

@import "first-component/index";
@import "second-component/index";
@forward "third-component/index";
"#,
        );

        assert_eq!(
            components(temp.path()).unwrap(),
            vec!["first-component", "second-component", "third-component"]
        );
    }

    #[test]
    fn errors_without_components() {
        let temp = tempdir().unwrap();
        write_index(temp.path(), "components/_index.scss", "");

        let err = components(temp.path()).unwrap_err();
        assert_eq!(err.to_string(), "No matches found in components/_index.scss");
    }

    #[test]
    fn extracts_overrides() {
        let temp = tempdir().unwrap();
        write_index(
            temp.path(),
            "overrides/_index.scss",
            r#"@import "../a-dependency";

@import "one";
@import "two";
@import "th-ree";
"#,
        );

        assert_eq!(overrides(temp.path()).unwrap(), vec!["one", "two", "th-ree"]);
    }

    #[test]
    fn errors_without_overrides() {
        let temp = tempdir().unwrap();
        write_index(temp.path(), "overrides/_index.scss", "");

        let err = overrides(temp.path()).unwrap_err();
        assert_eq!(err.to_string(), "No matches found in overrides/_index.scss");
    }

    #[test]
    fn missing_index_is_a_read_error() {
        let temp = tempdir().unwrap();

        assert!(matches!(
            components(temp.path()),
            Err(ContentsError::Read { .. })
        ));
    }
}
