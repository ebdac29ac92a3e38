mod pressable;
pub use pressable::*;
