pub mod dynamic;
