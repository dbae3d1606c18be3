// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Named interrupts for the DCMI and the DMA streams it is routed to.
//!
//! Numbers are identical across every STM32F4 part that has a DCMI.

#![allow(non_upper_case_globals)]

pub const DMA2_Stream1: u32 = 57;
pub const DMA2_Stream7: u32 = 70;
pub const DCMI: u32 = 78;
