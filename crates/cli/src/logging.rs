use std::any::Any;
use std::backtrace::Backtrace;
use std::panic;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

pub fn level(debug: bool, trace: bool) -> LevelFilter {
    if trace {
        LevelFilter::Trace
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Message a panic was raised with
fn cause(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("<cause unknown>")
}

pub fn setup(level: LevelFilter) -> anyhow::Result<()> {
    let force_backtrace = level == LevelFilter::Trace;

    panic::set_hook(Box::new(move |panic_info| {
        let backtrace = if force_backtrace {
            Backtrace::force_capture()
        } else {
            Backtrace::capture()
        };
        log::error!("{backtrace}");

        let (filename, line) = panic_info
            .location()
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or(("<unknown>", 0));

        log::error!(
            "A panic occurred at {}:{}: {}",
            filename,
            line,
            cause(panic_info.payload())
        );
    }));

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{l} {d(%H:%M:%S.%3f)} {f}:{L} {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    let _handle = log4rs::init_config(config)?;
    Ok(())
}
