//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Ethereum address / EIP-191 signature helpers
//! - EIP-4361 (Sign-In with Ethereum) message codec
//! - HS256 JWT keys
//! - Bearer token extraction
//! - Environment-driven HTTP configuration

pub mod bearer;
pub mod config;
pub mod eth;
pub mod jwt;
pub mod siwe;
