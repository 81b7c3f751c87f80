//! Generator tests: structural properties and concrete scenarios.

mod properties;
mod scenarios;
