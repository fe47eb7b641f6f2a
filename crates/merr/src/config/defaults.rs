//! Compile-time defaults, merged by `build.rs` from library defaults and
//! an optional `MERR_CONFIG_RS` file.

include!(concat!(env!("OUT_DIR"), "/merr_merged_config.rs"));
