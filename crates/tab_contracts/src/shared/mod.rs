pub mod tab_classes;
