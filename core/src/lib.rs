pub mod driver;
pub mod primality;
pub mod report;
