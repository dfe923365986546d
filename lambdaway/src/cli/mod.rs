pub mod envelope;
pub mod run;
