mod inventory;

pub use inventory::PageRequest;
