//! SkillBridge API
//!
//! Matches a user's self-reported skills against a fixed career catalog and
//! returns ranked recommendations with skill gaps, learning roadmaps, and
//! job-market insights.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
