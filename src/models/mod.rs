//! Data models for the application.
//!
//! Contains the portfolio dataset types shared by the terminal core,
//! the content provider, and the offline upload utility.

mod portfolio;

pub use portfolio::{Bio, Contact, Education, Experience, PortfolioData, Project};
