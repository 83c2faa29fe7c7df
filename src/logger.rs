use std::sync::Arc;

use log::{Log, Metadata, Record};

///
/// The logging capability handed to every component.
///
/// Components never call the `log` macros directly, so a test can swap in its own [Log]
/// and look at what was reported.
///
pub type Logger = Arc<dyn Log>;

///
/// A [Logger] forwarding to whatever logger the process installed, usually `env_logger`.
///
pub fn global() -> Logger {
    Arc::new(Global)
}

struct Global;

impl Log for Global {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

macro_rules! emit {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        let meta = ::log::Metadata::builder()
            .level($lvl)
            .target(module_path!())
            .build();

        if $logger.enabled(&meta) {
            $logger.log(
                &::log::Record::builder()
                    .metadata(meta)
                    .args(format_args!($($arg)+))
                    .module_path(Some(module_path!()))
                    .file(Some(file!()))
                    .line(Some(line!()))
                    .build(),
            );
        }
    }};
}
