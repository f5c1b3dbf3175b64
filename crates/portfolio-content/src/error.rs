//! Error types for the content registry.

use thiserror::Error;

/// Errors raised while parsing, validating, or querying a content registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed datasets.
    #[error("registry contains no seed datasets")]
    EmptySeeds,

    /// A seed dataset has a blank name.
    #[error("seed dataset at index {index} has a blank name")]
    BlankSeedName {
        /// Index of the dataset in the `seeds` array.
        index: usize,
    },

    /// Two seed datasets share a name.
    #[error("seed dataset '{name}' is defined more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// `defaultSeed` does not name a dataset in the registry.
    #[error("default seed '{name}' is not defined in the registry")]
    UnknownDefaultSeed {
        /// The configured default seed name.
        name: String,
    },

    /// A required text field of a record is blank.
    #[error("{location}: field '{field}' must not be blank")]
    BlankField {
        /// Human-readable record location, e.g. `seed 'showcase' projects[0]`.
        location: String,
        /// The offending field name (JSON spelling).
        field: &'static str,
    },

    /// A seed dataset has no projects.
    ///
    /// Stores treat a non-empty projects table as already seeded, so a seed
    /// without projects would be re-applied on every start.
    #[error("seed '{name}' must contain at least one project")]
    EmptySeedProjects {
        /// The seed name.
        name: String,
    },

    /// A fallback collection is empty.
    #[error("fallback {collection} must contain at least one record")]
    EmptyFallback {
        /// The collection name (`projects` or `experiences`).
        collection: &'static str,
    },

    /// The requested seed dataset was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}
