pub mod shared;

pub use shared::tab_classes::TabClasses;
