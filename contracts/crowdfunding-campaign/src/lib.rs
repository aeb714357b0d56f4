#![no_std]

pub mod balance;
mod constants;
pub mod contract;
pub mod data;
mod storage;
pub mod tier;
pub mod validation;
