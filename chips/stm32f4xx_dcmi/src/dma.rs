// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMA request routing of the DCMI.
//!
//! The DCMI request is only wired to DMA2, channel 1, on stream 1 or stream
//! 7 (RM0090, table 43 "DMA2 request mapping"). Programming the stream is
//! left to the DMA driver; this module names the routing.

use crate::dcmi;
use crate::nvic;

/// The DMA stream number. What other microcontrollers refer to as "channel",
/// STM32F4 refers to as "streams". Each controller has eight streams.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StreamId {
    Stream0 = 0,
    Stream1 = 1,
    Stream2 = 2,
    Stream3 = 3,
    Stream4 = 4,
    Stream5 = 5,
    Stream6 = 6,
    Stream7 = 7,
}

/// Request selector of a stream (`CHSEL` in `DMA_SxCR`).
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ChannelId {
    Channel0 = 0b000,
    Channel1 = 0b001,
    Channel2 = 0b010,
    Channel3 = 0b011,
    Channel4 = 0b100,
    Channel5 = 0b101,
    Channel6 = 0b110,
    Channel7 = 0b111,
}

/// DMA transfer direction (`DIR` in `DMA_SxCR`).
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    PeripheralToMemory = 0b00,
    MemoryToPeripheral = 0b01,
    MemoryToMemory = 0b10,
}

/// The DMA2 streams that can serve the DCMI request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DcmiDmaStream {
    Stream1,
    Stream7,
}

impl DcmiDmaStream {
    pub fn stream_id(&self) -> StreamId {
        match self {
            DcmiDmaStream::Stream1 => StreamId::Stream1,
            DcmiDmaStream::Stream7 => StreamId::Stream7,
        }
    }

    pub fn get_stream_idx(&self) -> usize {
        usize::from(self.stream_id() as u8)
    }

    pub fn channel_id(&self) -> ChannelId {
        // DCMI is on channel 1 of both streams.
        ChannelId::Channel1
    }

    // Returns the IRQ number of the stream. Used to enable the interrupt on
    // the NVIC.
    pub fn stream_irqn(&self) -> u32 {
        match self {
            DcmiDmaStream::Stream1 => nvic::DMA2_Stream1,
            DcmiDmaStream::Stream7 => nvic::DMA2_Stream7,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::PeripheralToMemory
    }

    /// Address the stream reads from: the DCMI data register.
    pub fn peripheral_address(&self) -> u32 {
        dcmi::DCMI_DR_ADDR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dcmi_request_mapping() {
        let stream = DcmiDmaStream::Stream1;
        assert_eq!(stream.stream_id(), StreamId::Stream1);
        assert_eq!(stream.get_stream_idx(), 1);
        assert_eq!(stream.channel_id() as u32, 0b001);
        assert_eq!(stream.stream_irqn(), 57);

        let stream = DcmiDmaStream::Stream7;
        assert_eq!(stream.stream_id(), StreamId::Stream7);
        assert_eq!(stream.get_stream_idx(), 7);
        assert_eq!(stream.channel_id(), ChannelId::Channel1);
        assert_eq!(stream.stream_irqn(), 70);
    }

    #[test]
    fn stream_reads_the_data_register() {
        for stream in [DcmiDmaStream::Stream1, DcmiDmaStream::Stream7] {
            assert_eq!(stream.direction() as u32, 0b00);
            assert_eq!(stream.peripheral_address(), 0x5005_0028);
        }
        assert_eq!(nvic::DCMI, 78);
    }
}
