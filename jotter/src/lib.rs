pub mod color;
pub mod config;
pub mod data;
pub mod lib_constants;
pub mod logging;
pub mod notepad;
pub mod rng;
pub mod storage;
pub mod util;
pub mod widget;

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => {{
        ::log::error!($($arg)+);
        ::std::process::exit(1)
    }};
}
