pub mod app;

pub mod config;

pub mod conversion;

pub mod domain;

#[cfg(windows)]
mod helpers;

pub mod input;

#[cfg(windows)]
mod platform;

mod utils;

#[cfg(test)]
mod tests;
