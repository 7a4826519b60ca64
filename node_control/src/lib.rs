#![no_std]

#[cfg(test)]
extern crate std;

pub mod bsp;
pub mod delay;
pub mod display;
pub mod leq;
pub mod vrms;
