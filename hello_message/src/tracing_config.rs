use crate::config::*;
use tracing::Subscriber;
use tracing_core::LevelFilter;
use tracing_subscriber::{filter::filter_fn, prelude::*, registry::LookupSpan, Layer};

fn build_target<S>(conf: LogEntry) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + Send + Sync,
    for<'span> S: LookupSpan<'span>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .boxed();

    let level: LevelFilter = conf.level.map(Into::into).unwrap_or(LevelFilter::TRACE);

    let filter = filter_fn(move |metadata| {
        metadata.level() <= &level
            && (conf.modules.is_empty()
                || if let Some(module) = metadata.module_path() {
                    conf.modules.iter().any(|m| module.starts_with(m))
                } else {
                    true
                })
    });

    layer.with_filter(filter).boxed()
}

/// Build a subscriber with one standard-error layer per configured target.
pub fn build_subscriber(conf: LoggingConfig) -> impl Subscriber + Send + Sync {
    let layers: Vec<_> = conf.targets.into_iter().map(build_target).collect();

    // The global filter only trims noisy modules; per-target filters do the rest
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(conf.default_level.unwrap_or(LogLevel::Trace))
        .with_targets(conf.module_levels);

    tracing_subscriber::registry().with(filter).with(layers)
}
