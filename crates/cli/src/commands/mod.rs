// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod permission;
pub mod register;
pub mod show;
pub mod supported;
