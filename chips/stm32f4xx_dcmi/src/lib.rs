// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register map for the Digital Camera Interface (DCMI) of the STM32F4xx MCU.
//!
//! The DCMI is present on the STM32F407/417, STM32F427/437, STM32F429/439,
//! STM32F446 and STM32F469/479. Register layout follows RM0090, section 15
//! "Digital camera interface (DCMI)".
//!
//! This crate only names registers and bitfields. Drivers that sequence
//! captures, program DMA streams or service interrupts build on top of it.

#![no_std]

pub mod dcmi;
pub mod dma;
pub mod errorcode;
pub mod nvic;

mod static_ref;

pub use errorcode::ErrorCode;
pub use static_ref::StaticRef;

/// The Tock Register Interface.
///
/// This is a re-export of the `tock-registers` crate provided for
/// convenience, so that driver crates name the DCMI fields and the register
/// cells through the same path.
pub mod registers {
    pub use tock_registers::fields::{Field, FieldValue};
    pub use tock_registers::interfaces;
    pub use tock_registers::registers::InMemoryRegister;
    pub use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
    pub use tock_registers::{register_bitfields, register_structs};
    pub use tock_registers::{LocalRegisterCopy, RegisterLongName};
}
