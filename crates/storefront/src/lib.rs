//! Session Cart Storefront library.
//!
//! A server-rendered storefront with a cart kept in the visitor's session.
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Components
//!
//! - [`storage`] - Cart storage adapter over the session store
//! - [`catalog`] - Fixed product catalog
//! - [`cart`] - Cart model (add, clear)
//! - [`views`] - Product and cart list rendering
//! - [`routes`] - HTTP wiring and the page-ready document

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storage;
pub mod views;
