pub mod mention;
