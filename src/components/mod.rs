// UI Components

pub mod slot_machine;

pub use slot_machine::SlotMachine;
