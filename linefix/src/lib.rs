//! Core library for the linefix batch patcher.
//!
//! linefix reads a catalog of lint diagnostics (file, line, category and an
//! optional identifier) and silences each one with a small text rewrite on
//! exactly that line: prefixing unused bindings with `_`, replacing `any`
//! and `{}` with `unknown`, and dropping unused imports.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Diagnostic catalog loading (TOML and JSON).
pub mod catalog;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Command implementations (`fix`, `init`).
pub mod commands;

/// Module for loading `.linefix.toml`.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Line-addressable source files.
pub mod document;

/// Module defining the entry point logic.
pub mod entry_point;

/// Byte-range edits applied to a single line.
pub mod fix;

/// Rewrite rules, one per lint category, and the engine that dispatches them.
pub mod rules;

/// Module containing utility functions.
pub mod utils;
