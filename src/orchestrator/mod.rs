//! Application-level orchestration.
//!
//! This module owns the single nbconvert run and the post-run processing (record building
//! and auto-save). The CLI layer calls into it and only decides where output goes.

mod controller;
mod post_process;

pub(crate) use controller::invoke;
pub(crate) use post_process::process_run;
