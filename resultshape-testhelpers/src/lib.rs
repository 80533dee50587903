#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Testing helpers for the resultshape workspace.
//!
//! Use the [`test`] attribute instead of the built-in one: the test body may
//! use `?` on any error, and [`setup`] runs first.
//!
//! ```ignore
//! use resultshape_testhelpers::test;
//!
//! #[test]
//! fn packs() {
//!     let shape = builder.freeze(root)?;
//! }
//! ```

pub use color_eyre::eyre;
pub use log;
pub use resultshape_testhelpers_macros::test;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Style};
use std::io::Write;
use std::sync::Once;

/// Environment variable holding the most verbose level to print
/// (`error`, `warn`, `info`, `debug`, `trace`). Defaults to `trace`.
pub const LOG_LEVEL_VAR: &str = "RESULTSHAPE_LOG";

struct SimpleLogger;

fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::new().fg_rgb::<243, 139, 168>(),
        Level::Warn => Style::new().fg_rgb::<249, 226, 175>(),
        Level::Info => Style::new().fg_rgb::<166, 227, 161>(),
        Level::Debug => Style::new().fg_rgb::<137, 180, 250>(),
        Level::Trace => Style::new().fg_rgb::<148, 226, 213>(),
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{} {}: {}",
            record.level().style(level_style(record.level())),
            record.target().dimmed(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn max_level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Trace)
}

/// Installs color-eyre (except on miri) and the logger. Runs once per
/// process; later calls do nothing.
pub fn setup() {
    static SETUP: Once = Once::new();

    SETUP.call_once(|| {
        #[cfg(not(miri))]
        install_eyre_hooks();

        if log::set_boxed_logger(Box::new(SimpleLogger)).is_ok() {
            log::set_max_level(max_level_from_env());
        }
    });
}

#[cfg(not(miri))]
fn install_eyre_hooks() {
    use color_eyre::config::HookBuilder;
    use regex::Regex;
    use std::sync::LazyLock;

    // Panic plumbing and test-harness frames, hidden from backtraces.
    static IGNORE_FRAMES: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(std::panic|core::panic|test::run_test|__pthread_cond_wait|std::sys::(pal|backtrace)|std::thread::Builder|core::ops::function|test::__rust_begin_short_backtrace|<core::panic::|<alloc::boxed::Box<F,A> as core::ops::function::FnOnce<Args>>::call_once)")
            .expect("frame filter regex is valid")
    });

    let filter = move |frames: &mut Vec<&color_eyre::config::Frame>| {
        frames.retain(|frame| {
            frame
                .name
                .as_ref()
                .is_none_or(|name| !IGNORE_FRAMES.is_match(name))
        });
    };

    // Another harness may already own the hooks; the logger still matters.
    let _ = HookBuilder::default()
        .add_frame_filter(Box::new(filter))
        .install();
}
