// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Tags of the legacy Plonk flavors, which generic code still tells apart.
use crate::impl_capabilities;

/// Standard Plonk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standard;

/// Ultra Plonk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ultra;

impl_capabilities!(Standard => Plonk);
impl_capabilities!(Ultra => Plonk, UltraPlonk, UltraPlonkOrHonk);
