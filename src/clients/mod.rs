//! HTTP clients for the services this UI talks to.

pub mod assets;
