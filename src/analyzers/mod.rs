//! Reading aggregation, wet-bulb estimation and heat-stress classification.
//!
//! This module reduces station readings to area averages, derives the
//! wet-bulb temperature from them, and maps that onto a risk tier with
//! guidance for the user.

pub mod aggregate;
pub mod risk;
pub mod types;
pub mod utility;
pub mod wetbulb;
