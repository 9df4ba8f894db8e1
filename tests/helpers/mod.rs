#![allow(unused_imports)]
#![allow(dead_code)]
pub mod factories;
pub mod test_db;

pub use factories::*;
pub use test_db::*;
