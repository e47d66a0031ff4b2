//! Sprite container reader.
//!
//! A container is a small header, a table of absolute frame offsets,
//! and one compressed frame blob per stored image. Unlike the content
//! database this format is randomly addressable: the offset table is
//! read eagerly on open and each image fetch seeks straight to its
//! frame. An offset of zero or less means "no image stored for this
//! frame" and is normal data, not corruption.

use crate::{Error, Result, image};
use byteorder::{LittleEndian, ReadBytesExt};
use flate2::read::ZlibDecoder;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Upper bound on the frame count a header may claim.
const MAX_FRAMES: i32 = 1 << 20;

/// Fixed-size frame header stored at each table offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub width: i16,
    pub height: i16,
    pub origin_x: i16,
    pub origin_y: i16,
    pub shadow_x: i16,
    pub shadow_y: i16,
    pub shadow: u8,
    pub payload_length: i32,
}

impl FrameHeader {
    fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            width: reader.read_i16::<LittleEndian>()?,
            height: reader.read_i16::<LittleEndian>()?,
            origin_x: reader.read_i16::<LittleEndian>()?,
            origin_y: reader.read_i16::<LittleEndian>()?,
            shadow_x: reader.read_i16::<LittleEndian>()?,
            shadow_y: reader.read_i16::<LittleEndian>()?,
            shadow: reader.read_u8()?,
            payload_length: reader.read_i32::<LittleEndian>()?,
        })
    }

    /// Size of the decompressed pixel buffer these dimensions require.
    fn pixel_bytes(&self) -> Option<usize> {
        if self.width <= 0 || self.height <= 0 || self.payload_length <= 0 {
            return None;
        }
        Some(self.width as usize * self.height as usize * 4)
    }
}

/// An open sprite container.
///
/// Holds its file handle for the lifetime of the value and may be
/// queried repeatedly and out of order. The seek cursor is shared
/// mutable state, so one instance must not serve concurrent `get_image`
/// calls; parallel extraction wants one open instance per worker.
#[derive(Debug)]
pub struct SpriteLibrary {
    file: BufReader<File>,
    version: i32,
    offsets: Vec<i32>,
}

impl SpriteLibrary {
    /// Versions this reader understands. Version 3 added a seek hint
    /// after the frame count, which is consumed and unused.
    pub const SUPPORTED_VERSIONS: std::ops::RangeInclusive<i32> = 1..=3;

    /// Open a container and read its header and offset table.
    ///
    /// A missing file is reported as [`Error::NotFound`]; anything
    /// structurally wrong with the header fails the open.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::NotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        let mut file = BufReader::new(file);

        let version = file.read_i32::<LittleEndian>()?;
        if !Self::SUPPORTED_VERSIONS.contains(&version) {
            return Err(Error::UnsupportedVersion(version));
        }
        let count = file.read_i32::<LittleEndian>()?;
        if !(0..=MAX_FRAMES).contains(&count) {
            return Err(Error::FrameCountOutOfRange(count));
        }
        if version >= 3 {
            let _frame_seek = file.read_i32::<LittleEndian>()?;
        }

        let mut offsets = Vec::with_capacity(count as usize);
        for _ in 0..count {
            offsets.push(file.read_i32::<LittleEndian>()?);
        }
        debug!("opened sprite library version {} with {} frames", version, count);

        Ok(Self {
            file,
            version,
            offsets,
        })
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Number of entries in the offset table, stored frames or not.
    pub fn frame_count(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the table stores image data for this frame index.
    pub fn has_frame(&self, index: usize) -> bool {
        self.offsets.get(index).is_some_and(|&offset| offset > 0)
    }

    /// Fetch one frame as encoded PNG bytes.
    ///
    /// Returns `None` for an out-of-range index, a sentinel offset, or
    /// any decode failure. Failures never propagate out of this method:
    /// bulk extraction over a large catalog has to survive individual
    /// corrupt frames, and callers only track extracted/missing counts.
    pub fn get_image(&mut self, index: usize) -> Option<Vec<u8>> {
        let &offset = self.offsets.get(index)?;
        if offset <= 0 {
            return None;
        }
        match self.decode_frame(offset as u64) {
            Ok(png) => Some(png),
            Err(e) => {
                debug!("frame {} unavailable: {}", index, e);
                None
            }
        }
    }

    fn decode_frame(&mut self, offset: u64) -> Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(offset))?;
        let header = FrameHeader::parse(&mut self.file)?;
        let pixel_bytes = header.pixel_bytes().ok_or(Error::MalformedFrame)?;

        let mut payload = vec![0u8; header.payload_length as usize];
        self.file.read_exact(&mut payload)?;

        let mut pixels = Vec::with_capacity(pixel_bytes);
        ZlibDecoder::new(payload.as_slice()).read_to_end(&mut pixels)?;
        if pixels.len() < pixel_bytes {
            return Err(Error::ShortPixelBuffer {
                expected: pixel_bytes,
                actual: pixels.len(),
            });
        }
        pixels.truncate(pixel_bytes);

        image::correct_alpha(&mut pixels);
        image::bgra_to_rgba(&mut pixels);
        image::encode_png(header.width as u32, header.height as u32, &pixels)
    }
}
