//! MCP tool handlers for the menu browser server
//!
//! Each tool family lives in its own file as `handle_*` methods on
//! `MenuBrowserHandler`.

pub mod filters;
pub mod menu;
pub mod navigation;
pub mod parks;
pub mod tracker;
