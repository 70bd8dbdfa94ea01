//! Machine components: disks, terminals and port adapters

pub mod altair;
pub mod cpm;
pub mod disk;
pub mod terminal;
