use thiserror::Error;

/// Reasons a country load can fail.
///
/// These never reach the user: the loader logs them and falls back to an
/// empty catalogue.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request to {endpoint} failed: {source}")]
	Transport {
		endpoint: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("HTTP error! status: {0}")]
	Status(u16),
	#[error("response body is not valid country data: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("response body is not a JSON array")]
	NotAnArray,
}
