use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Endpoint: {}", config.loader.endpoint);
	match config.timeout_secs {
		Some(secs) => println!("  Timeout: {secs}s"),
		None => println!("  Timeout: none"),
	}
	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(default)")
	);
	println!("  Thousands separator: '{}'", config.thousands_separator);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Title: {}", config.labels.title);
	println!(
		"  Log level: {}",
		config.logging.level.as_deref().unwrap_or("(RUST_LOG or info)")
	);
	match config.logging.resolve_file() {
		Ok(path) => println!("  Log file: {}", path.display()),
		Err(err) => println!("  Log file: unavailable ({err})"),
	}
}

#[cfg(test)]
mod tests {
	use super::super::sample;
	use super::*;

	#[test]
	fn summary_prints_without_panic() {
		let mut config = sample();
		config.initial_query = "fra".into();
		config.timeout_secs = Some(10);
		print_summary(&config);
	}
}
