// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod date_codec;
mod server_parsing;
