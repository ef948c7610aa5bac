pub mod bias;
pub mod classify;
pub mod config;
pub mod info;
pub mod master;
pub mod run;
