//! Data models for fixlet
//!
//! A fixlet is a single row of the backing file: a named item of a given
//! criticality, scoped to a site, with a count of affected computers.

pub mod fixlet;

pub use fixlet::Fixlet;
