//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The core crate stays free of UI dependencies
//! - Painting happens only in the render loop
//! - Fetch code never reaches into widget state
//!
//! These tests are designed to catch violations early in the development cycle.

#![allow(dead_code)]

pub fn placeholder() {
    // Placeholder to make this a valid library
}
