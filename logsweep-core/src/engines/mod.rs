// logsweep-core/src/engines/mod.rs
//! Concrete `ReplaceEngine` implementations.
//!
//! Each engine lives in its own file within this directory. An editor
//! integration would add its own engine here, delegating to the host's
//! find/replace facility.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod regex_engine;
