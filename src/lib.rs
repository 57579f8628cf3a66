//! digitmap: Device Digit Map Generation
//!
//! Translates a hierarchical dialplan (contexts holding pattern extensions and
//! includes of other contexts) into the flat digit map string that ATAs,
//! gateways and IP phones use to decide when a dialed number is complete.

pub mod cli;
pub mod config;
pub mod dialplan;
pub mod digitmap;
pub mod error;
pub mod logging;
