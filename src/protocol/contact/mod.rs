//! Contact book commands

pub mod lookup;

pub use lookup::LookupCmd;
