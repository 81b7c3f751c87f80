//! HTML export tests

mod export;
