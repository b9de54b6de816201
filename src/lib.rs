pub mod brittlebank;
pub mod cli;
