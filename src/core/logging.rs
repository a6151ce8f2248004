//! Logging abstraction
//!
//! Leveled logging macros that route by build target:
//! - `defmt` feature: forwarded to the matching `defmt` macro
//! - Host tests: printed with `println!`/`eprintln!`
//! - Anywhere else: compiled to a no-op that still type-checks the
//!   format arguments
//!
//! The scheduler core never logs; task bodies and the station composition
//! layer report through these macros, keeping observability out of the
//! dispatch path. Format arguments must implement `Display` on host builds
//! and `defmt::Format` under the `defmt` feature.

/// Log an error (peripheral failures that lose data)
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        ::std::eprintln!("[ERROR] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        { let _ = ::core::format_args!($($arg)*); }
    }};
}

/// Log a warning (recoverable per-tick failures)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        ::std::println!("[WARN] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        { let _ = ::core::format_args!($($arg)*); }
    }};
}

/// Log an informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        ::std::println!("[INFO] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        { let _ = ::core::format_args!($($arg)*); }
    }};
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        ::std::println!("[DEBUG] {}", ::std::format!($($arg)*));

        #[cfg(all(not(feature = "defmt"), not(test)))]
        { let _ = ::core::format_args!($($arg)*); }
    }};
}
