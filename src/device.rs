//! Serial wire protocol for the keyboard's LED palette API.
//!
//! Commands are ASCII lines terminated by CR LF. The palette travels as a
//! flat sequence of `r g b w` integers, four per LED.

use std::io::{Read, Write};
use std::time::Duration;

use log::warn;
use serialport::SerialPort;

use crate::color::Color;
use crate::error::{DeviceError, Error};

pub const BAUD_RATE: u32 = 115_200;

/// Read and write timeout on the serial link.
pub const TIMEOUT: Duration = Duration::from_secs(5);

const QUERY_COMMAND: &str = "palette";
const CHANNELS_PER_LED: usize = 4;

/// One exclusively-owned connection to a keyboard.
///
/// Generic over the transport so tests can drive the protocol through an
/// in-memory pipe. Dropping the channel closes the underlying port, so the
/// connection is released on every exit path.
pub struct DeviceChannel<T> {
    transport: T,
}

impl DeviceChannel<Box<dyn SerialPort>> {
    /// Open the serial device at `path`.
    pub fn open(path: &str) -> Result<Self, Error> {
        let port = serialport::new(path, BAUD_RATE)
            .timeout(TIMEOUT)
            .open()
            .map_err(|error| Error::Device(DeviceError::Open(error)))?;
        Ok(Self::new(port))
    }
}

impl<T: Read + Write> DeviceChannel<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Consume the channel and return the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Query the device's current LED palette.
    ///
    /// A response whose length is not a multiple of four loses its trailing
    /// partial quadruple with a warning; that is a data-quality issue, not
    /// a protocol error.
    pub fn query_palette(&mut self) -> Result<Vec<Color>, Error> {
        self.send(QUERY_COMMAND)?;
        let response = self.receive()?;

        let mut channels = Vec::new();
        for token in response.split_whitespace() {
            let value: u8 = token
                .parse()
                .map_err(|_| DeviceError::Response(token.to_string()))?;
            channels.push(value);
        }
        let remainder = channels.len() % CHANNELS_PER_LED;
        if remainder != 0 {
            warn!("palette response ended mid-color; dropping {remainder} trailing channels");
            channels.truncate(channels.len() - remainder);
        }

        Ok(channels
            .chunks_exact(CHANNELS_PER_LED)
            .map(|led| Color::from_rgbw(led[0], led[1], led[2], led[3]))
            .collect())
    }

    /// Overwrite the device's LED palette.
    ///
    /// An empty color list sends nothing at all: a no-op rather than a
    /// degenerate command.
    pub fn set_palette(&mut self, colors: &[Color]) -> Result<(), Error> {
        if colors.is_empty() {
            return Ok(());
        }
        let channels: Vec<String> = colors
            .iter()
            .flat_map(|color| color.to_rgbw())
            .map(|channel| channel.to_string())
            .collect();
        self.send(&format!("{QUERY_COMMAND} {}", channels.join(" ")))
    }

    /// Send one CR LF-terminated command line.
    pub fn send(&mut self, command: &str) -> Result<(), Error> {
        self.transport
            .write_all(format!("{command}\r\n").as_bytes())
            .map_err(DeviceError::Io)?;
        self.transport.flush().map_err(DeviceError::Io)?;
        Ok(())
    }

    /// Receive one line, stripped of trailing CR/LF.
    ///
    /// Responses are 7-bit ASCII; any other byte is a transport error.
    pub fn receive(&mut self) -> Result<String, Error> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.transport.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    line.push(byte[0]);
                }
                Err(error) => return Err(DeviceError::Io(error).into()),
            }
        }
        if !line.is_ascii() {
            return Err(DeviceError::Encoding.into());
        }
        let text = String::from_utf8(line).map_err(|_| DeviceError::Encoding)?;
        Ok(text.trim_end_matches('\r').to_string())
    }
}
