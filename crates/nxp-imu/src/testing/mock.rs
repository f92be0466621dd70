extern crate std;

use std::vec::Vec;

use crate::error::Error;
use crate::interface::{Interface, sealed};

/// One bus transaction as seen by the mock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transaction {
    Read { reg: u8, len: usize },
    Write { reg: u8, value: u8 },
}

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    transactions: Vec<Transaction>,
    fail_next: Option<Error>,
    truncate_next_read: Option<usize>,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            transactions: Vec::new(),
            fail_next: None,
            truncate_next_read: None,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn with_block(mut self, reg: u8, data: &[u8]) -> Self {
        for (offset, value) in data.iter().enumerate() {
            self.set_reg(reg.wrapping_add(offset as u8), *value);
        }
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Fails the next transaction of any kind with `error`.
    pub(crate) fn fail_next(&mut self, error: Error) {
        self.fail_next = Some(error);
    }

    /// Delivers only `len` bytes on the next block read.
    pub(crate) fn truncate_next_read(&mut self, len: usize) {
        self.truncate_next_read = Some(len);
    }
}

impl Interface for MockInterface {
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer).await?;
        Ok(buffer[0])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        if buffer.is_empty() {
            return Ok(());
        }
        self.transactions.push(Transaction::Read {
            reg,
            len: buffer.len(),
        });
        let delivered = self
            .truncate_next_read
            .take()
            .map_or(buffer.len(), |len| len.min(buffer.len()));
        for (offset, slot) in buffer.iter_mut().take(delivered).enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.regs[addr as usize];
        }
        if delivered < buffer.len() {
            return Err(Error::PartialRead);
        }
        Ok(())
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        self.transactions.push(Transaction::Write { reg, value });
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}
