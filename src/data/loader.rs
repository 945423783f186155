//! Background loading of the country catalogue.
//!
//! The fetch runs exactly once on a worker thread and reports back through a
//! channel. Failures are logged and normalized to an empty list. The worker
//! shares a liveness flag with its [`LoadHandle`]; once the handle is
//! cancelled or dropped, a late result is discarded instead of delivered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reqwest::blocking::Client;

use super::{Country, LoadError};

/// REST Countries endpoint listing independent states.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/independent?status=true";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything able to produce the country catalogue.
pub trait CountrySource: Send + 'static {
	fn fetch(&self) -> Result<Vec<Country>, LoadError>;
}

impl<F> CountrySource for F
where
	F: Fn() -> Result<Vec<Country>, LoadError> + Send + 'static,
{
	fn fetch(&self) -> Result<Vec<Country>, LoadError> {
		self()
	}
}

/// Connection settings for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct LoaderOptions {
	pub endpoint: String,
	/// `None` waits indefinitely.
	pub timeout: Option<Duration>,
}

impl Default for LoaderOptions {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			timeout: None,
		}
	}
}

/// Fetches the catalogue over HTTP with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpSource {
	client: Client,
	endpoint: String,
}

impl HttpSource {
	pub fn new(options: &LoaderOptions) -> Result<Self, LoadError> {
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.timeout(options.timeout)
			.build()
			.map_err(LoadError::Client)?;
		Ok(Self {
			client,
			endpoint: options.endpoint.clone(),
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl CountrySource for HttpSource {
	fn fetch(&self) -> Result<Vec<Country>, LoadError> {
		let transport = |source: reqwest::Error| LoadError::Transport {
			endpoint: self.endpoint.clone(),
			source,
		};

		tracing::debug!(endpoint = %self.endpoint, "requesting country catalogue");
		let response = self.client.get(&self.endpoint).send().map_err(transport)?;
		let status = response.status().as_u16();
		let body = response.bytes().map_err(transport)?;
		parse_countries(status, &body)
	}
}

/// Interpret an HTTP response as a country list.
///
/// The body must be a JSON array of well-formed records; anything else is
/// rejected as a whole.
pub fn parse_countries(status: u16, body: &[u8]) -> Result<Vec<Country>, LoadError> {
	if !(200..300).contains(&status) {
		return Err(LoadError::Status(status));
	}

	let value: serde_json::Value = serde_json::from_slice(body)?;
	if !value.is_array() {
		return Err(LoadError::NotAnArray);
	}

	Ok(serde_json::from_value(value)?)
}

/// Run the source once, logging and swallowing any failure.
pub fn load_countries(source: &dyn CountrySource) -> Vec<Country> {
	match source.fetch() {
		Ok(countries) => {
			tracing::info!(count = countries.len(), "loaded country catalogue");
			countries
		}
		Err(err) => {
			tracing::error!(error = %err, "failed to load countries");
			Vec::new()
		}
	}
}

/// Result posted by the loader thread.
#[derive(Debug, Clone, Default)]
pub struct LoadUpdate {
	pub countries: Vec<Country>,
}

/// Owner side of a running load.
#[derive(Debug)]
pub struct LoadHandle {
	alive: Arc<AtomicBool>,
	worker: Option<JoinHandle<()>>,
}

impl LoadHandle {
	/// Mark the result as unwanted. The request itself is not interrupted.
	pub fn cancel(&self) {
		self.alive.store(false, Ordering::Release);
	}

	pub fn is_active(&self) -> bool {
		self.alive.load(Ordering::Acquire)
	}

	/// Block until the worker thread exits.
	pub fn wait(mut self) {
		if let Some(worker) = self.worker.take()
			&& let Err(err) = worker.join()
		{
			std::panic::resume_unwind(err);
		}
	}
}

impl Drop for LoadHandle {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// Start loading on a background thread.
pub fn spawn<S: CountrySource>(source: S) -> (LoadHandle, Receiver<LoadUpdate>) {
	let (tx, rx) = mpsc::channel();
	let alive = Arc::new(AtomicBool::new(true));
	let flag = Arc::clone(&alive);

	let worker = thread::spawn(move || {
		let countries = load_countries(&source);
		if !flag.load(Ordering::Acquire) {
			tracing::debug!(
				count = countries.len(),
				"explorer closed before load finished; discarding result"
			);
			return;
		}
		// The receiver may already be gone; nothing is waiting in that case.
		let _ = tx.send(LoadUpdate { countries });
	});

	let handle = LoadHandle {
		alive,
		worker: Some(worker),
	};
	(handle, rx)
}
