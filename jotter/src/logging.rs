use std::ffi::OsStr;
use std::path::PathBuf;
use boolean_enums::{_gen_boolean_enum_common, _gen_boolean_enum_gen_enum, gen_boolean_enum};
use log::warn;
use syslog::{BasicLogger, Facility};

pub fn init_logging(use_syslog: UseSyslog) {
    if use_syslog.into() {
        if let Err(e) = init_logging_syslog() {
            init_logging_env();
            warn!("{e}, logging to stderr");
        }
    } else {
        init_logging_env();
    }
}
gen_boolean_enum!(pub UseSyslog);

fn init_logging_syslog() -> Result<(), Box<dyn std::error::Error>> {
    let logger = syslog::unix(
        syslog::Formatter3164 {
            facility: Facility::LOG_USER,
            hostname: None,
            process: std::env::args()
                .next()
                .and_then(|name|
                    PathBuf::from(name)
                        .file_name()
                        .map(|n| OsStr::to_string_lossy(n).into_owned())
                )
                .unwrap_or_default(),
            pid: std::process::id(),
        }
    ).map_err(|e| format!("syslog initialization failed: {e}"))?;
    log::set_boxed_logger(Box::new(BasicLogger::new(logger)))?;
    log::set_max_level(log::STATIC_MAX_LEVEL);
    Ok(())
}

/// `RUST_LOG` overrides the build's default level.
fn init_logging_env() {
    env_logger::builder()
        .filter_level(
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            }
        )
        .parse_default_env()
        .init()
}
