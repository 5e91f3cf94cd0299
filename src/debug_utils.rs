use embedded_hal::i2c::{Error, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DummyError {
    InvalidTest,
    Nack,
}

impl Error for DummyError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match &self {
            DummyError::InvalidTest => embedded_hal::i2c::ErrorKind::Other,
            DummyError::Nack => embedded_hal::i2c::ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            ),
        }
    }
}

/// Replays one canned response for every read and keeps every written frame.
pub struct DummyBus<'a> {
    pub response: &'a [u8],
    pub written: Vec<Vec<u8>>,
    pub fail: bool,
}

impl<'a> DummyBus<'a> {
    pub fn new(response: &'a [u8]) -> Self {
        Self {
            response,
            written: Vec::new(),
            fail: false,
        }
    }

    /// A bus on which no device acknowledges.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(&[])
        }
    }

    fn respond(&self, response: &mut [u8]) -> Result<(), DummyError> {
        if response.len() != self.response.len() {
            return Err(DummyError::InvalidTest);
        }

        response.copy_from_slice(self.response);

        Ok(())
    }
}

impl embedded_hal::i2c::ErrorType for DummyBus<'_> {
    type Error = DummyError;
}

impl embedded_hal::i2c::I2c for DummyBus<'_> {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [embedded_hal::i2c::Operation],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(DummyError::Nack);
        }

        match operations {
            [Operation::Write(command), Operation::Read(response)] => {
                self.written.push(command.to_vec());
                self.respond(response)
            }
            [Operation::Read(response)] => self.respond(response),
            [Operation::Write(command)] => {
                self.written.push(command.to_vec());
                Ok(())
            }
            // Other transactions are invalid
            _ => Err(DummyError::InvalidTest),
        }
    }
}
