use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Plain logger without timestamps, `RUST_LOG` overrides the `info`
/// default. Also picks up `log` records from the simulation crates.
pub fn init_logger() {
	struct EmptyTime;
	impl FormatTime for EmptyTime {
		fn format_time(
			&self,
			_: &mut tracing_subscriber::fmt::format::Writer<'_>,
		) -> std::fmt::Result {
			Ok(())
		}
	}

	let format = format()
		.with_timer(EmptyTime)
		.with_level(true)
		.with_target(true);

	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.event_format(format)
				.with_filter(filter),
		)
		.init();
}
