pub mod classification;
pub mod generation;
