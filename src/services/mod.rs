// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod linkedin;
pub mod normalize;

pub use linkedin::{LinkedInClient, LinkedInService};
pub use normalize::PostShape;
