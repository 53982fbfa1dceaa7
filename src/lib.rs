//! Snake on a simulated LED-matrix board.
//!
//! The game state machine ([`game::Game`]) draws into a row-major pixel
//! buffer ([`board::FrameBuffer`]) and reads a polled four-button pad
//! ([`input::DPad`]), mirroring the memory-mapped LED matrix and D-pad of
//! the embedded board it simulates. The terminal frontend blits the pixel
//! buffer with half-block glyphs and latches keyboard events into pad
//! samples.

pub mod board;
pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod snake;
pub mod terminal_runtime;
