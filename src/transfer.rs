// CLASSIFICATION: COMMUNITY
// Filename: transfer.rs v0.3
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Caller-memory boundary.
//!
//! Sessions never touch caller memory directly; they go through the
//! two traits below, which stand in for the copy_from_user /
//! copy_to_user step of a real driver. Slice-backed implementations
//! cover in-process callers; tests substitute faulting ones.

use thiserror::Error;

/// Failure while copying bytes across the caller/device boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("caller memory transfer failed")]
pub struct TransferFault;

/// Inbound side of a write: the caller's payload.
pub trait TransferSource {
    /// Number of bytes the caller is handing over.
    fn len(&self) -> usize;

    /// True when the caller hands over nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the payload into the device's staging buffer.
    /// `dst.len()` never exceeds [`TransferSource::len`].
    fn copy_in(&self, dst: &mut [u8]) -> Result<(), TransferFault>;
}

/// Outbound side of a read: the caller's destination.
pub trait TransferSink {
    /// Number of bytes the caller asked for.
    fn wanted(&self) -> usize;

    /// Copy device bytes out to the caller. `src.len()` never exceeds
    /// [`TransferSink::wanted`].
    fn copy_out(&mut self, src: &[u8]) -> Result<(), TransferFault>;
}

impl TransferSource for &[u8] {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn copy_in(&self, dst: &mut [u8]) -> Result<(), TransferFault> {
        let n = dst.len().min((**self).len());
        dst[..n].copy_from_slice(&self[..n]);
        Ok(())
    }
}

impl TransferSource for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn copy_in(&self, dst: &mut [u8]) -> Result<(), TransferFault> {
        self.as_slice().copy_in(dst)
    }
}

/// Sink writing into a caller-provided slice.
///
/// Tracks how much of the slice was filled so the caller can take
/// `&buf[..sink.filled()]` afterwards.
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    filled: usize,
}

impl<'a> SliceSink<'a> {
    /// Wrap a destination slice. Its length is the requested read size.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, filled: 0 }
    }

    /// Bytes copied out so far.
    pub fn filled(&self) -> usize {
        self.filled
    }
}

impl TransferSink for SliceSink<'_> {
    fn wanted(&self) -> usize {
        self.buf.len()
    }

    fn copy_out(&mut self, src: &[u8]) -> Result<(), TransferFault> {
        let n = src.len().min(self.buf.len() - self.filled);
        self.buf[self.filled..self.filled + n].copy_from_slice(&src[..n]);
        self.filled += n;
        Ok(())
    }
}

/// Sink collecting into an owned Vec, used by the convenience read path.
pub struct VecSink {
    wanted: usize,
    data: Vec<u8>,
}

impl VecSink {
    /// Sink for a read of at most `wanted` bytes.
    pub fn new(wanted: usize) -> Self {
        Self {
            wanted,
            data: Vec::new(),
        }
    }

    /// Consume the sink, yielding the collected bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl TransferSink for VecSink {
    fn wanted(&self) -> usize {
        self.wanted
    }

    fn copy_out(&mut self, src: &[u8]) -> Result<(), TransferFault> {
        self.data.extend_from_slice(src);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_sink_tracks_fill() {
        let mut buf = [0u8; 8];
        let mut sink = SliceSink::new(&mut buf);
        assert_eq!(sink.wanted(), 8);
        sink.copy_out(b"abc").unwrap();
        assert_eq!(sink.filled(), 3);
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn source_copies_prefix() {
        let src: &[u8] = b"hello";
        let mut dst = [0u8; 3];
        src.copy_in(&mut dst).unwrap();
        assert_eq!(&dst, b"hel");
    }
}
