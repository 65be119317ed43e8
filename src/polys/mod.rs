// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! This module contains the polynomial types held by proving keys and by the
//! sumcheck/folding accumulators whose shapes a flavor derives.
pub mod domain;
pub mod polynomial;
pub mod univariate;
