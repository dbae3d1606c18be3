// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Digital camera interface (DCMI) registers.
//!
//! RM0090, section 15.8 "DCMI registers". All registers are 32 bits wide and
//! must be accessed as words.
//!
//! Besides the register block, this module provides a few value helpers that
//! encode settings into correctly-shifted [`FieldValue`]s. They never touch
//! the hardware; writing the values is left to the driver.

use crate::registers::{
    register_bitfields, register_structs, Field, FieldValue, LocalRegisterCopy, ReadOnly,
    ReadWrite, WriteOnly,
};
use crate::{ErrorCode, StaticRef};
use core::mem::offset_of;

/// Start of the DCMI block on the AHB2 bus.
pub const DCMI_BASE_ADDR: usize = 0x5005_0000;

pub const DCMI_BASE: StaticRef<DcmiRegisters> =
    unsafe { StaticRef::new(DCMI_BASE_ADDR as *const DcmiRegisters) };

/// Absolute address of the data register. This is the peripheral address a
/// DMA stream reads captured words from.
pub const DCMI_DR_ADDR: u32 = (DCMI_BASE_ADDR + offset_of!(DcmiRegisters, dr)) as u32;

register_structs! {
    pub DcmiRegisters {
        /// DCMI control register 1
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// DCMI status register
        (0x04 => pub sr: ReadOnly<u32, SR::Register>),
        /// DCMI raw interrupt status register
        (0x08 => pub ris: ReadOnly<u32, RIS::Register>),
        /// DCMI interrupt enable register
        (0x0C => pub ier: ReadWrite<u32, IER::Register>),
        /// DCMI masked interrupt status register
        (0x10 => pub mis: ReadOnly<u32, MIS::Register>),
        /// DCMI interrupt clear register
        (0x14 => pub icr: WriteOnly<u32, ICR::Register>),
        /// DCMI embedded synchronization code register
        (0x18 => pub escr: ReadWrite<u32, ESCR::Register>),
        /// DCMI embedded synchronization unmask register
        (0x1C => pub esur: ReadWrite<u32, ESUR::Register>),
        /// DCMI crop window start
        (0x20 => pub cwstrt: ReadWrite<u32, CWSTRT::Register>),
        /// DCMI crop window size
        (0x24 => pub cwsize: ReadWrite<u32, CWSIZE::Register>),
        /// DCMI data register
        (0x28 => pub dr: ReadOnly<u32, DR::Register>),
        (0x2C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// DCMI enable
        ENABLE OFFSET(14) NUMBITS(1) [],
        /// Extended data mode
        EDM OFFSET(10) NUMBITS(2) [
            Bits8 = 0,
            Bits10 = 1,
            Bits12 = 2,
            Bits14 = 3
        ],
        /// Frame capture rate control
        FCRC OFFSET(8) NUMBITS(2) [
            AllFrames = 0,
            AlternateFrames = 1,
            OneInFourFrames = 2
        ],
        /// Vertical synchronization polarity
        VSPOL OFFSET(7) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ],
        /// Horizontal synchronization polarity
        HSPOL OFFSET(6) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ],
        /// Pixel clock polarity
        PCKPOL OFFSET(5) NUMBITS(1) [
            FallingEdge = 0,
            RisingEdge = 1
        ],
        /// Embedded synchronization select
        ESS OFFSET(4) NUMBITS(1) [
            Hardware = 0,
            Embedded = 1
        ],
        /// JPEG format
        JPEG OFFSET(3) NUMBITS(1) [],
        /// Crop feature
        CROP OFFSET(2) NUMBITS(1) [],
        /// Capture mode
        CM OFFSET(1) NUMBITS(1) [
            ContinuousGrab = 0,
            Snapshot = 1
        ],
        /// Capture enable
        CAPTURE OFFSET(0) NUMBITS(1) []
    ],
    pub SR [
        /// FIFO not empty
        FNE OFFSET(2) NUMBITS(1) [],
        /// Frame synchronization
        VSYNC OFFSET(1) NUMBITS(1) [
            ActiveFrame = 0,
            BetweenFrames = 1
        ],
        /// Line synchronization
        HSYNC OFFSET(0) NUMBITS(1) [
            ActiveLine = 0,
            BetweenLines = 1
        ]
    ],
    pub RIS [
        /// Line raw interrupt status
        LINE_RIS OFFSET(4) NUMBITS(1) [],
        /// VSYNC raw interrupt status
        VSYNC_RIS OFFSET(3) NUMBITS(1) [],
        /// Synchronization error raw interrupt status
        ERR_RIS OFFSET(2) NUMBITS(1) [],
        /// Overrun raw interrupt status
        OVR_RIS OFFSET(1) NUMBITS(1) [],
        /// Capture complete raw interrupt status
        FRAME_RIS OFFSET(0) NUMBITS(1) []
    ],
    pub IER [
        /// Line interrupt enable
        LINE_IE OFFSET(4) NUMBITS(1) [],
        /// VSYNC interrupt enable
        VSYNC_IE OFFSET(3) NUMBITS(1) [],
        /// Synchronization error interrupt enable
        ERR_IE OFFSET(2) NUMBITS(1) [],
        /// Overrun interrupt enable
        OVR_IE OFFSET(1) NUMBITS(1) [],
        /// Capture complete interrupt enable
        FRAME_IE OFFSET(0) NUMBITS(1) []
    ],
    pub MIS [
        /// Line masked interrupt status
        LINE_MIS OFFSET(4) NUMBITS(1) [],
        /// VSYNC masked interrupt status
        VSYNC_MIS OFFSET(3) NUMBITS(1) [],
        /// Synchronization error masked interrupt status
        ERR_MIS OFFSET(2) NUMBITS(1) [],
        /// Overrun masked interrupt status
        OVR_MIS OFFSET(1) NUMBITS(1) [],
        /// Capture complete masked interrupt status
        FRAME_MIS OFFSET(0) NUMBITS(1) []
    ],
    pub ICR [
        /// Line interrupt status clear
        LINE_ISC OFFSET(4) NUMBITS(1) [],
        /// VSYNC interrupt status clear
        VSYNC_ISC OFFSET(3) NUMBITS(1) [],
        /// Synchronization error interrupt status clear
        ERR_ISC OFFSET(2) NUMBITS(1) [],
        /// Overrun interrupt status clear
        OVR_ISC OFFSET(1) NUMBITS(1) [],
        /// Capture complete interrupt status clear
        FRAME_ISC OFFSET(0) NUMBITS(1) []
    ],
    pub ESCR [
        /// Frame end delimiter code
        FEC OFFSET(24) NUMBITS(8) [],
        /// Line end delimiter code
        LEC OFFSET(16) NUMBITS(8) [],
        /// Line start delimiter code
        LSC OFFSET(8) NUMBITS(8) [],
        /// Frame start delimiter code
        FSC OFFSET(0) NUMBITS(8) []
    ],
    pub ESUR [
        /// Frame end delimiter unmask
        FEU OFFSET(24) NUMBITS(8) [],
        /// Line end delimiter unmask
        LEU OFFSET(16) NUMBITS(8) [],
        /// Line start delimiter unmask
        LSU OFFSET(8) NUMBITS(8) [],
        /// Frame start delimiter unmask
        FSU OFFSET(0) NUMBITS(8) []
    ],
    pub CWSTRT [
        /// Vertical start line count
        VST OFFSET(16) NUMBITS(13) [],
        /// Horizontal offset count, in pixel clocks
        HOFFCNT OFFSET(0) NUMBITS(14) []
    ],
    pub CWSIZE [
        /// Vertical line count, minus one
        VLINE OFFSET(16) NUMBITS(14) [],
        /// Capture count, in pixel clocks, minus one
        CAPCNT OFFSET(0) NUMBITS(14) []
    ],
    pub DR [
        BYTE3 OFFSET(24) NUMBITS(8) [],
        BYTE2 OFFSET(16) NUMBITS(8) [],
        BYTE1 OFFSET(8) NUMBITS(8) [],
        BYTE0 OFFSET(0) NUMBITS(8) []
    ]
];

/// ICR value clearing every interrupt flag.
pub const ICR_CLEAR_ALL: FieldValue<u32, ICR::Register> =
    FieldValue::<u32, ICR::Register>::new(0x1F, 0, 0x1F);

/// IER value enabling every interrupt source.
pub const IER_ENABLE_ALL: FieldValue<u32, IER::Register> =
    FieldValue::<u32, IER::Register>::new(0x1F, 0, 0x1F);

/// The five DCMI interrupt sources.
///
/// RIS, IER, MIS and ICR share one bit layout; each source maps to the same
/// bit position in all four.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Interrupt {
    /// A line has been received
    Line,
    /// VSYNC went from active to inactive
    Vsync,
    /// Embedded synchronization codes arrived out of order
    Error,
    /// FIFO overrun, the current frame is lost
    Overrun,
    /// Capture of a frame (or crop window) is complete
    Frame,
}

impl Interrupt {
    /// Every source, highest bit first.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::Line,
        Interrupt::Vsync,
        Interrupt::Error,
        Interrupt::Overrun,
        Interrupt::Frame,
    ];

    pub fn raw_status(&self) -> Field<u32, RIS::Register> {
        match self {
            Interrupt::Line => RIS::LINE_RIS,
            Interrupt::Vsync => RIS::VSYNC_RIS,
            Interrupt::Error => RIS::ERR_RIS,
            Interrupt::Overrun => RIS::OVR_RIS,
            Interrupt::Frame => RIS::FRAME_RIS,
        }
    }

    pub fn masked_status(&self) -> Field<u32, MIS::Register> {
        match self {
            Interrupt::Line => MIS::LINE_MIS,
            Interrupt::Vsync => MIS::VSYNC_MIS,
            Interrupt::Error => MIS::ERR_MIS,
            Interrupt::Overrun => MIS::OVR_MIS,
            Interrupt::Frame => MIS::FRAME_MIS,
        }
    }

    pub fn enable(&self) -> FieldValue<u32, IER::Register> {
        match self {
            Interrupt::Line => IER::LINE_IE::SET,
            Interrupt::Vsync => IER::VSYNC_IE::SET,
            Interrupt::Error => IER::ERR_IE::SET,
            Interrupt::Overrun => IER::OVR_IE::SET,
            Interrupt::Frame => IER::FRAME_IE::SET,
        }
    }

    pub fn clear(&self) -> FieldValue<u32, ICR::Register> {
        match self {
            Interrupt::Line => ICR::LINE_ISC::SET,
            Interrupt::Vsync => ICR::VSYNC_ISC::SET,
            Interrupt::Error => ICR::ERR_ISC::SET,
            Interrupt::Overrun => ICR::OVR_ISC::SET,
            Interrupt::Frame => ICR::FRAME_ISC::SET,
        }
    }

    /// Sources flagged in a copy of MIS.
    pub fn pending(mis: LocalRegisterCopy<u32, MIS::Register>) -> impl Iterator<Item = Interrupt> {
        Interrupt::ALL
            .into_iter()
            .filter(move |source| mis.is_set(source.masked_status()))
    }
}

/// A crop rectangle, in the units the hardware counts.
///
/// Horizontal quantities are pixel clocks, not pixels: with 8-bit data an
/// RGB565 pixel spans two clocks. The hardware stores capture and line
/// counts minus one; [`CropWindow`] keeps the real counts and converts when
/// encoding.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropWindow {
    horizontal_offset: u32,
    vertical_start: u32,
    capture_count: u32,
    line_count: u32,
}

impl CropWindow {
    /// Validate a crop window.
    ///
    /// Returns `INVAL` for an empty window and `SIZE` when any quantity does
    /// not fit in its field.
    pub fn new(
        horizontal_offset: u32,
        vertical_start: u32,
        capture_count: u32,
        line_count: u32,
    ) -> Result<CropWindow, ErrorCode> {
        if capture_count == 0 || line_count == 0 {
            return Err(ErrorCode::INVAL);
        }
        if horizontal_offset > CWSTRT::HOFFCNT.mask
            || vertical_start > CWSTRT::VST.mask
            || capture_count - 1 > CWSIZE::CAPCNT.mask
            || line_count - 1 > CWSIZE::VLINE.mask
        {
            return Err(ErrorCode::SIZE);
        }
        Ok(CropWindow {
            horizontal_offset,
            vertical_start,
            capture_count,
            line_count,
        })
    }

    /// Decode the window currently programmed in CWSTRT and CWSIZE.
    pub fn from_registers(
        start: LocalRegisterCopy<u32, CWSTRT::Register>,
        size: LocalRegisterCopy<u32, CWSIZE::Register>,
    ) -> CropWindow {
        CropWindow {
            horizontal_offset: start.read(CWSTRT::HOFFCNT),
            vertical_start: start.read(CWSTRT::VST),
            capture_count: size.read(CWSIZE::CAPCNT) + 1,
            line_count: size.read(CWSIZE::VLINE) + 1,
        }
    }

    pub fn horizontal_offset(&self) -> u32 {
        self.horizontal_offset
    }

    pub fn vertical_start(&self) -> u32 {
        self.vertical_start
    }

    pub fn capture_count(&self) -> u32 {
        self.capture_count
    }

    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn start(&self) -> FieldValue<u32, CWSTRT::Register> {
        CWSTRT::VST.val(self.vertical_start) + CWSTRT::HOFFCNT.val(self.horizontal_offset)
    }

    pub fn size(&self) -> FieldValue<u32, CWSIZE::Register> {
        CWSIZE::VLINE.val(self.line_count - 1) + CWSIZE::CAPCNT.val(self.capture_count - 1)
    }
}

/// Delimiter codes recognized when embedded synchronization (`CR::ESS`) is
/// selected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EmbeddedSyncCodes {
    pub frame_start: u8,
    pub line_start: u8,
    pub line_end: u8,
    pub frame_end: u8,
}

impl EmbeddedSyncCodes {
    pub fn escr(&self) -> FieldValue<u32, ESCR::Register> {
        ESCR::FEC.val(self.frame_end.into())
            + ESCR::LEC.val(self.line_end.into())
            + ESCR::LSC.val(self.line_start.into())
            + ESCR::FSC.val(self.frame_start.into())
    }

    pub fn from_register(escr: LocalRegisterCopy<u32, ESCR::Register>) -> EmbeddedSyncCodes {
        EmbeddedSyncCodes {
            frame_start: escr.read(ESCR::FSC) as u8,
            line_start: escr.read(ESCR::LSC) as u8,
            line_end: escr.read(ESCR::LEC) as u8,
            frame_end: escr.read(ESCR::FEC) as u8,
        }
    }
}

/// Per-bit compare masks for the embedded delimiter codes. A cleared bit is
/// ignored when matching the corresponding code.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct EmbeddedSyncUnmask {
    pub frame_start: u8,
    pub line_start: u8,
    pub line_end: u8,
    pub frame_end: u8,
}

impl EmbeddedSyncUnmask {
    /// Compare every bit of every code.
    pub const ALL: EmbeddedSyncUnmask = EmbeddedSyncUnmask {
        frame_start: 0xFF,
        line_start: 0xFF,
        line_end: 0xFF,
        frame_end: 0xFF,
    };

    pub fn esur(&self) -> FieldValue<u32, ESUR::Register> {
        ESUR::FEU.val(self.frame_end.into())
            + ESUR::LEU.val(self.line_end.into())
            + ESUR::LSU.val(self.line_start.into())
            + ESUR::FSU.val(self.frame_start.into())
    }
}

/// Split a data register word into bytes in capture order, byte 0 first.
pub fn data_bytes(dr: LocalRegisterCopy<u32, DR::Register>) -> [u8; 4] {
    [
        dr.read(DR::BYTE0) as u8,
        dr.read(DR::BYTE1) as u8,
        dr.read(DR::BYTE2) as u8,
        dr.read(DR::BYTE3) as u8,
    ]
}
