// Utility functions
// Browser helpers shared by the components

pub mod clipboard;
