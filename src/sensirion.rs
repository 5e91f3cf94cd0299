use embedded_hal::i2c::I2c;
use thiserror::Error;

pub type Cmd = [u8; 2];

/// Bytes per data word on the wire: two data bytes and their CRC.
pub const WORD_LEN: usize = 3;

/// Longest reply any supported command produces, in words.
pub const MAX_REPLY_WORDS: usize = 3;

#[derive(Clone, Copy, Hash, Debug, PartialEq, Eq, PartialOrd, Ord, Error)]
pub enum Error<I2cError> {
    #[error("protocol violation")]
    ProtocolViolation,
    #[error("checksum mismatch")]
    ChecksumMismatch,
    #[error(transparent)]
    Transport(#[from] I2cError),
}

impl<E> embedded_hal::i2c::Error for Error<E>
where
    E: embedded_hal::i2c::Error,
{
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            Self::Transport(err) => err.kind(),
            _ => embedded_hal::i2c::ErrorKind::Other,
        }
    }
}

// https://sensirion.com/media/documents/48C4B7FB/64C134E7/Sensirion_SCD4x_Datasheet.pdf
// Section 3.11
pub fn crc(data: &[u8]) -> u8 {
    let mut crc = 0xff;

    for byte in data {
        crc ^= byte;

        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ 0x31;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}

/// Packs a value into its on-wire form: big-endian data bytes followed by the CRC.
pub fn encode_word(value: u16) -> [u8; WORD_LEN] {
    let [msb, lsb] = value.to_be_bytes();
    [msb, lsb, crc(&[msb, lsb])]
}

pub fn decode_word<E>(data: &[u8; WORD_LEN]) -> Result<u16, Error<E>> {
    let expected = crc(&[data[0], data[1]]);
    if expected != data[2] {
        log::error!(
            "checksum mismatch: received {:#04x}, computed {:#04x}",
            data[2],
            expected
        );
        return Err(Error::ChecksumMismatch);
    }

    Ok(u16::from_be_bytes([data[0], data[1]]))
}

/// Decodes a response frame of exactly `N` words, validating each word's CRC
/// in order. The first bad word fails the whole frame.
pub fn decode_words<const N: usize, E>(frame: &[u8]) -> Result<[u16; N], Error<E>> {
    if frame.len() != WORD_LEN * N {
        return Err(Error::ProtocolViolation);
    }

    let mut words = [0u16; N];
    for (word, piece) in words.iter_mut().zip(frame.as_chunks::<WORD_LEN>().0) {
        *word = decode_word::<E>(piece)?;
    }

    Ok(words)
}

/// Static description of a device command: its code and the shape of the
/// exchange it drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    pub code: Cmd,
    pub write_words: usize,
    pub reply_words: usize,
}

impl Command {
    pub const fn new(code: Cmd, write_words: usize, reply_words: usize) -> Self {
        Self {
            code,
            write_words,
            reply_words,
        }
    }

    pub const fn expects_reply(&self) -> bool {
        self.reply_words > 0
    }

    fn check_shape<E>(&self, write_words: usize, reply_words: usize) -> Result<(), Error<E>> {
        if self.write_words != write_words || self.reply_words != reply_words {
            Err(Error::ProtocolViolation)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
pub struct Sensor<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C> Sensor<I2C> {
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Sensor<I2C> {
    /// Writes a bare command with no payload and no reply.
    pub fn send_command(&mut self, cmd: &Command) -> Result<(), Error<I2C::Error>> {
        cmd.check_shape::<I2C::Error>(0, 0)?;
        log::debug!("write command {:02x}{:02x}", cmd.code[0], cmd.code[1]);

        self.i2c.write(self.addr, &cmd.code)?;
        Ok(())
    }

    /// Writes a command followed by one data word.
    pub fn send_command_with_word(
        &mut self,
        cmd: &Command,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        cmd.check_shape::<I2C::Error>(1, 0)?;
        log::debug!(
            "write command {:02x}{:02x} with word {:#06x}",
            cmd.code[0],
            cmd.code[1],
            value
        );

        let word = encode_word(value);
        let frame = [cmd.code[0], cmd.code[1], word[0], word[1], word[2]];
        self.i2c.write(self.addr, &frame)?;
        Ok(())
    }

    /// Writes a command, then reads its reply in a separate transaction.
    pub fn command_response<const N: usize>(
        &mut self,
        cmd: &Command,
    ) -> Result<[u16; N], Error<I2C::Error>> {
        cmd.check_shape::<I2C::Error>(0, N)?;
        self.send_reply_command(cmd)?;
        self.read_response::<N>()
    }

    /// Writes a command and reads its reply in a single combined transaction.
    pub fn command_write_read<const N: usize>(
        &mut self,
        cmd: &Command,
    ) -> Result<[u16; N], Error<I2C::Error>> {
        cmd.check_shape::<I2C::Error>(0, N)?;
        if N > MAX_REPLY_WORDS {
            return Err(Error::ProtocolViolation);
        }
        log::debug!("write-read command {:02x}{:02x}", cmd.code[0], cmd.code[1]);

        let mut buf = [0u8; WORD_LEN * MAX_REPLY_WORDS];
        let frame = &mut buf[..WORD_LEN * N];
        self.i2c.write_read(self.addr, &cmd.code, frame)?;

        decode_words(frame)
    }

    /// Reads `N` words left pending by a previously written command.
    pub fn read_response<const N: usize>(&mut self) -> Result<[u16; N], Error<I2C::Error>> {
        if N > MAX_REPLY_WORDS {
            return Err(Error::ProtocolViolation);
        }

        let mut buf = [0u8; WORD_LEN * MAX_REPLY_WORDS];
        let frame = &mut buf[..WORD_LEN * N];
        self.i2c.read(self.addr, frame)?;

        decode_words(frame)
    }

    fn send_reply_command(&mut self, cmd: &Command) -> Result<(), Error<I2C::Error>> {
        log::debug!("write command {:02x}{:02x}", cmd.code[0], cmd.code[1]);

        self.i2c.write(self.addr, &cmd.code)?;
        Ok(())
    }
}
