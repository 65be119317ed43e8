// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the honk-flavor project.
// See the LICENSE file in the project root for full license information.

//! Descriptors of the relations checked by the shipped flavors.
//!
//! Only shapes live here: the number of subrelations of each relation and their
//! partial and total lengths. Accumulation logic belongs to the prover.
pub mod avm;
pub mod eccvm;
pub mod goblin;
pub mod ultra;
