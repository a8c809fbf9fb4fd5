//! bmi-diet - BMI calculator and diet recommendation client
//!
//! The library holds the form controller and everything it talks to: input
//! validation, the HTTP scoring client, the pure result view model, the
//! terminal presenter, and a reference scoring service.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod core;
pub mod presenter;
pub mod server;
pub mod utils;

pub use client::{HttpScoringClient, ScoringService};
pub use controller::{ControllerSettings, FormController, Outcome};
pub use crate::core::{
    input::{FieldError, Gender, SubmissionInput},
    payload::{DietDetails, PredictRequest, ResultPayload},
    traits::Presenter,
    view::{ResultView, SubmitFailure, build_view},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
