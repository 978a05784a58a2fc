//! UI module - reusable widgets for the estimator window

pub mod components;
