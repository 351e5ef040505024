//! Plugs three devices with mismatched APIs into one [`adapters::Outlet`],
//! driven from a console menu.

pub mod adapters;
pub mod console;
pub mod devices;
