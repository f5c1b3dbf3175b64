//! Content registry loading and seed selection.

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use portfolio_content::{ContentRegistry, SeedDataset};
use tracing::info;

use super::StartupSeedingError;

/// Load the content registry from `path`, or the bundled registry when no
/// path is configured.
///
/// # Examples
///
/// ```
/// use backend::seeding::load_content_registry;
///
/// let registry = load_content_registry(None).expect("bundled registry");
/// assert_eq!(registry.default_seed().name(), "showcase");
/// ```
pub fn load_content_registry(path: Option<&Path>) -> Result<ContentRegistry, StartupSeedingError> {
    let Some(path) = path else {
        return Ok(ContentRegistry::bundled()?);
    };
    let contents = read_registry(path)?;
    let registry = ContentRegistry::from_json(&contents)?;
    info!(
        path = %path.display(),
        seeds = registry.seeds().len(),
        "loaded content registry"
    );
    Ok(registry)
}

/// Pick the dataset named `seed_name`, or the registry default when unset.
pub fn resolve_seed<'a>(
    registry: &'a ContentRegistry,
    seed_name: Option<&str>,
) -> Result<&'a SeedDataset, StartupSeedingError> {
    match seed_name.map(str::trim) {
        None => Ok(registry.default_seed()),
        Some("") => Err(StartupSeedingError::EmptySeedName),
        Some(name) => Ok(registry.find_seed(name)?),
    }
}

fn read_registry(path: &Path) -> Result<String, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let payload = dir.read(Path::new(file_name)).map_err(read_error)?;
    String::from_utf8(payload)
        .map_err(|source| read_error(std::io::Error::new(std::io::ErrorKind::InvalidData, source)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cap_fs::write_file;
    use portfolio_content::{BUNDLED_REGISTRY_JSON, RegistryError};
    use rstest::rstest;

    fn temp_registry(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "portfolio-registry-{name}-{}.json",
            std::process::id()
        ));
        write_file(&path, contents.as_bytes()).expect("write registry fixture");
        path
    }

    #[test]
    fn bundled_registry_is_used_without_a_path() {
        let registry = load_content_registry(None).expect("bundled registry");
        assert_eq!(registry.default_seed().projects().len(), 3);
    }

    #[test]
    fn configured_path_is_read_from_disk() {
        let path = temp_registry("copy", BUNDLED_REGISTRY_JSON);
        let registry = load_content_registry(Some(&path)).expect("registry from disk");
        assert_eq!(registry.default_seed().name(), "showcase");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("portfolio-registry-does-not-exist.json");
        let err = load_content_registry(Some(&path)).expect_err("missing file");
        assert!(matches!(err, StartupSeedingError::RegistryRead { path: p, .. } if p == path));
    }

    #[test]
    fn invalid_json_is_a_registry_error() {
        let path = temp_registry("broken", "{ not json");
        let err = load_content_registry(Some(&path)).expect_err("invalid registry");
        assert!(matches!(
            err,
            StartupSeedingError::Registry(RegistryError::ParseError { .. })
        ));
    }

    #[rstest]
    #[case(None, Some("showcase"))]
    #[case(Some("showcase"), Some("showcase"))]
    #[case(Some("  showcase "), Some("showcase"))]
    #[case(Some("   "), None)]
    #[case(Some("missing"), None)]
    fn resolves_seed_names(#[case] requested: Option<&str>, #[case] expected: Option<&str>) {
        let registry = ContentRegistry::bundled().expect("bundled registry");
        let resolved = resolve_seed(&registry, requested).ok().map(SeedDataset::name);
        assert_eq!(resolved, expected);
    }
}
