//! Error types for sedcure.

/// Result type alias for sedcure operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sedcure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Annotation file has an extension no loader understands.
    #[error("unsupported annotation format: {path} (expected .txt or .jams)")]
    UnsupportedAnnotationFormat {
        /// Path to the annotation file.
        path: std::path::PathBuf,
    },

    /// Failed to parse a flat tab-separated annotation file.
    #[error("failed to parse annotation file '{path}': {message}")]
    FlatParse {
        /// Path to the annotation file.
        path: std::path::PathBuf,
        /// Description of the parse failure.
        message: String,
    },

    /// Failed to read a structured annotation file.
    #[error("failed to read annotation file '{path}'")]
    JamsRead {
        /// Path to the annotation file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a structured annotation file.
    #[error("failed to parse annotation file '{path}'")]
    JamsParse {
        /// Path to the annotation file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Structured annotation file contains no annotation records.
    #[error("no annotation records in '{path}'")]
    NoAnnotationRecords {
        /// Path to the annotation file.
        path: std::path::PathBuf,
    },

    /// Background events were requested from a source without role data.
    #[error(
        "cannot extract background events from '{path}': flat annotation files carry no role information"
    )]
    BackgroundUnavailable {
        /// Path to the annotation file.
        path: std::path::PathBuf,
    },

    /// Failed to open the audio file associated with an annotation.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// No annotation files found in the input directory.
    #[error("no annotation files found in '{path}'")]
    NoAnnotationFiles {
        /// Path to the searched directory.
        path: std::path::PathBuf,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an annotation table.
    #[error("failed to write table '{path}'")]
    TableWrite {
        /// Path to the output table.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the kept-clip manifest.
    #[error("failed to write manifest '{path}'")]
    ManifestWrite {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the files belonging to a clip.
    #[error("failed to list clip files for '{path}'")]
    ClipList {
        /// Path to the clip's annotation file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove a clip file.
    #[error("failed to remove clip file '{path}'")]
    ClipRemove {
        /// Path to the file being removed.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
