//! Recording interface for unit tests

use std::vec::Vec;

use crate::interface::DisplayInterface;

/// One bus transaction as seen by the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    Command(u8),
    Data(Vec<u8>),
}

/// Rejected transaction, carrying its position in the log
#[derive(Debug, PartialEq, Eq)]
pub struct MockError(pub usize);

/// Interface that records every transaction
///
/// With `fail_at` set, the transaction with that index is rejected and not
/// recorded.
#[derive(Debug, Default)]
pub struct MockInterface {
    pub log: Vec<Transaction>,
    pub fail_at: Option<usize>,
}

impl MockInterface {
    pub fn failing_at(index: usize) -> Self {
        Self {
            log: Vec::new(),
            fail_at: Some(index),
        }
    }

    /// Command bytes in order
    pub fn commands(&self) -> Vec<u8> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Command(c) => Some(*c),
                Transaction::Data(_) => None,
            })
            .collect()
    }

    /// Data packets in order
    pub fn packets(&self) -> Vec<&[u8]> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Data(d) => Some(d.as_slice()),
                Transaction::Command(_) => None,
            })
            .collect()
    }

    fn record(&mut self, transaction: Transaction) -> Result<(), MockError> {
        if self.fail_at == Some(self.log.len()) {
            return Err(MockError(self.log.len()));
        }
        self.log.push(transaction);
        Ok(())
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Transaction::Command(command))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Transaction::Data(data.to_vec()))
    }
}
