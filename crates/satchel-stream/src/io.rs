//! `std::io` view over an open stream handle.
//!
//! Generic consumers written against [`Read`]/[`Seek`] — `read_to_end`,
//! `io::copy`, format parsers — can stream container assets through a
//! [`StreamReader`] without knowing the adapter exists.

use std::io::{self, Read, Seek, SeekFrom};

use crate::factory::StreamFactory;
use crate::handle::StreamHandle;
use crate::source::AssetSource;
use crate::stream::AssetStreams;

/// Borrowing [`Read`]/[`Seek`] implementation over one open stream.
///
/// The reader does not own the stream: dropping it leaves the handle
/// open, and closing remains the caller's job through
/// [`AssetStreams::close`].
pub struct StreamReader<'a, S: AssetSource, F: StreamFactory> {
    streams: &'a mut AssetStreams<S, F>,
    handle: StreamHandle,
}

impl<'a, S: AssetSource, F: StreamFactory> StreamReader<'a, S, F> {
    /// View the open stream `handle` through the standard I/O traits.
    pub const fn new(streams: &'a mut AssetStreams<S, F>, handle: StreamHandle) -> Self {
        Self { streams, handle }
    }

    /// The handle this reader wraps.
    pub const fn handle(&self) -> StreamHandle {
        self.handle
    }
}

impl<S: AssetSource, F: StreamFactory> Read for StreamReader<'_, S, F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.streams.read(self.handle, buf))
    }
}

impl<S: AssetSource, F: StreamFactory> Seek for StreamReader<'_, S, F> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.streams
            .seek(self.handle, pos)
            .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        u64::try_from(self.streams.tell(self.handle))
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek target unresolvable"))
    }
}
