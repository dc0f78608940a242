/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (field `store_enabled` reads
/// `STORE_ENABLED`, and so on) and call `Config::try_from_env()` at startup.
/// Call `load_dotenv()` first to pick up a local `.env` file.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn try_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Same as `try_from_env`, for tests and tooling that supply their own
    /// key/value pairs instead of the process environment.
    fn try_from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }
}

/// Load a `.env` file from the working directory (or a parent) if present.
///
/// Variables already set in the process environment win over the file.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        ::tracing::debug!(path = %path.display(), "loaded .env file");
    }
}
