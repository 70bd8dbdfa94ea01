//! CP/M floppy disk image handling
//!
//! Images are raw byte files laid out track-major then sector-major in
//! physical order. Sector access goes through a skew table mapping
//! 1-based logical sector numbers to 1-based physical indices; the
//! table is either supplied or derived from a skew factor. Short image
//! files are padded with 0xE5, CP/M's directory-free marker.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// =============================================================================
// DiskGeometry
// =============================================================================

/// Floppy disk geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskGeometry {
    /// Bytes per sector
    pub sector_size: usize,
    /// Sectors per track
    pub sectors_per_track: usize,
    /// Number of tracks
    pub tracks: usize,
}

impl DiskGeometry {
    /// The 8" 250 KB SSSD format used by the CP/M machine's drives
    pub const IBM_8_INCH: DiskGeometry = DiskGeometry {
        sector_size: 128,
        sectors_per_track: 26,
        tracks: 77,
    };

    /// Total size in bytes
    pub fn total_size(&self) -> usize {
        self.sector_size * self.sectors_per_track * self.tracks
    }
}

// =============================================================================
// Skew table
// =============================================================================

/// Build the canonical skew table for a track
///
/// Starting from raw sector 0, repeatedly step by `skew_factor` mod
/// `num_sectors`, bumping by one whenever the candidate is already
/// taken, then translate the collected indices to 1-based.
pub fn make_skew_table(num_sectors: usize, skew_factor: usize) -> Vec<usize> {
    let mut table = vec![0];
    while table.len() < num_sectors {
        let mut sec = (table[table.len() - 1] + skew_factor) % num_sectors;
        if table.contains(&sec) {
            sec += 1;
        }
        table.push(sec);
    }
    table.iter().map(|n| n + 1).collect()
}

// =============================================================================
// CpmDisk
// =============================================================================

/// A track/sector-addressed floppy image backed by a file
pub struct CpmDisk {
    /// Sector data, track-major, in physical order
    tracks: Vec<Vec<Vec<u8>>>,
    geometry: DiskGeometry,
    /// Logical sector (1-based) to physical sector (1-based)
    skew_table: Vec<usize>,
    write_protect: bool,
    path: PathBuf,
}

impl CpmDisk {
    /// Load a disk image, deriving the skew table from a factor
    pub fn open(
        path: &Path,
        geometry: DiskGeometry,
        skew_factor: usize,
        write_protect: bool,
    ) -> io::Result<Self> {
        let skew_table = make_skew_table(geometry.sectors_per_track, skew_factor);
        Self::open_with_table(path, geometry, skew_table, write_protect)
    }

    /// Load a disk image with an explicit skew table
    pub fn open_with_table(
        path: &Path,
        geometry: DiskGeometry,
        skew_table: Vec<usize>,
        write_protect: bool,
    ) -> io::Result<Self> {
        let mut bytes = fs::read(path)?;
        // Pad any shortfall against the declared capacity with the
        // CP/M directory-free marker
        bytes.resize(geometry.total_size(), 0xE5);

        let mut tracks = Vec::with_capacity(geometry.tracks);
        let mut chunks = bytes.chunks_exact(geometry.sector_size);
        for _ in 0..geometry.tracks {
            let mut track = Vec::with_capacity(geometry.sectors_per_track);
            for _ in 0..geometry.sectors_per_track {
                track.push(chunks.next().map(|s| s.to_vec()).unwrap_or_default());
            }
            tracks.push(track);
        }

        Ok(Self {
            tracks,
            geometry,
            skew_table,
            write_protect,
            path: path.to_path_buf(),
        })
    }

    /// Get the disk geometry
    pub fn geometry(&self) -> DiskGeometry {
        self.geometry
    }

    /// Check if the disk is write-protected
    pub fn is_write_protected(&self) -> bool {
        self.write_protect
    }

    /// Set write protection status
    pub fn set_write_protected(&mut self, protected: bool) {
        self.write_protect = protected;
    }

    /// Read a sector; `sector` is the 1-based logical sector number
    pub fn sector(&self, track: usize, sector: usize) -> &[u8] {
        let raw = self.skew_table[sector - 1] - 1;
        &self.tracks[track][raw]
    }

    /// Write a sector; `sector` is the 1-based logical sector number.
    /// Silently dropped when the disk is write-protected.
    pub fn set_sector(&mut self, track: usize, sector: usize, data: &[u8]) {
        if self.write_protect {
            return;
        }
        let raw = self.skew_table[sector - 1] - 1;
        self.tracks[track][raw] = data.to_vec();
    }

    /// Persist the whole image back to its file
    pub fn save(&self) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(self.geometry.total_size());
        for track in &self.tracks {
            for sector in track {
                bytes.extend_from_slice(sector);
            }
        }
        fs::write(&self.path, bytes)
    }

    /// Get the image file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// =============================================================================
// Tests
// =============================================================================
