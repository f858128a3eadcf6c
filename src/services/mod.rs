// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod aggregate;
pub mod crawler;
pub mod extract;
pub mod logging;
pub mod search;
