//! Parsing for the key list initialization file.

pub mod key_list;

pub use key_list::{
    default_key_list, load_key_list, parse_key_list, KeyList, SkipReason, SkippedEntry,
};
