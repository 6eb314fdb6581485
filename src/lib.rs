//! Toll Plaza Simulation Library
//!
//! A discrete-time simulation of vehicles queueing at highway toll booths.

pub mod simulation;
