// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod assignments;
mod commands;
mod errors;
mod expansion;
mod helpers;
mod properties;
mod quoting;
