//! Daily class notice: schedule, weather and notes composed into a text
//! notice and a mobile page, with a bounded generation history.
pub mod composer;
pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod parser;
pub mod renderer;
pub mod run_tool;
pub mod schedule_store;
pub mod session;
pub mod weather_cache;
pub mod weather_getter;
