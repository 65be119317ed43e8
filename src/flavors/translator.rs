// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! The Translator flavor tag.
use crate::impl_capabilities;

/// Translates the ECCVM op queue into BN254 scalar-field arithmetic. It is neither a
/// Honk-family Ultra flavor nor a folding flavor, and is classified as such.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslatorFlavor;

impl_capabilities!(TranslatorFlavor =>);
