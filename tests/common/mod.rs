//! Recording interface shared by the integration tests.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use sh1106::{ByteKind, DisplayInterface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDown;

#[derive(Debug, Default)]
pub struct Recorder {
    pub sent: Vec<(ByteKind, u8)>,
    pub fail_at: Option<usize>,
    attempts: usize,
}

impl Recorder {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }
}

impl DisplayInterface for Recorder {
    type Error = LinkDown;

    fn send(&mut self, kind: ByteKind, byte: u8) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(LinkDown);
        }
        self.sent.push((kind, byte));
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D, _settle_ms: u32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
