// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::Result;
use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag};

use std::io::Read;

/// Replace elements of an array at a given cursor index for use with a zero-initialised array.
macro_rules! array_push {
    ($arr:ident, $cursor:ident, $value:expr) => {{
        for entry in $value {
            $arr[$cursor] = entry;
            $cursor += 1;
        }
    }};
}

impl From<GeneralPurposeFlag> for u16 {
    fn from(flag: GeneralPurposeFlag) -> u16 {
        let encrypted: u16 = match flag.encrypted {
            false => 0x0,
            true => 0b1,
        };
        let data_descriptor: u16 = match flag.data_descriptor {
            false => 0x0,
            true => 0x8,
        };
        let filename_unicode: u16 = match flag.filename_unicode {
            false => 0x0,
            true => 0x800,
        };

        encrypted | data_descriptor | filename_unicode
    }
}

impl From<u16> for GeneralPurposeFlag {
    fn from(value: u16) -> GeneralPurposeFlag {
        let encrypted = !matches!(value & 0x1, 0);
        let data_descriptor = !matches!((value & 0x8) >> 3, 0);
        let filename_unicode = !matches!((value & 0x800) >> 11, 0);

        GeneralPurposeFlag { encrypted, data_descriptor, filename_unicode }
    }
}

impl CentralDirectoryRecord {
    pub fn as_slice(&self) -> [u8; CDH_LENGTH] {
        let mut array = [0; CDH_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.v_made_by.to_le_bytes());
        array_push!(array, cursor, self.v_needed.to_le_bytes());
        array_push!(array, cursor, self.flags.to_le_bytes());
        array_push!(array, cursor, self.compression.to_le_bytes());
        array_push!(array, cursor, self.mod_time.to_le_bytes());
        array_push!(array, cursor, self.mod_date.to_le_bytes());
        array_push!(array, cursor, self.crc.to_le_bytes());
        array_push!(array, cursor, self.compressed_size.to_le_bytes());
        array_push!(array, cursor, self.uncompressed_size.to_le_bytes());
        array_push!(array, cursor, self.file_name_length.to_le_bytes());
        array_push!(array, cursor, self.extra_field_length.to_le_bytes());
        array_push!(array, cursor, self.file_comment_length.to_le_bytes());
        array_push!(array, cursor, self.disk_start.to_le_bytes());
        array_push!(array, cursor, self.inter_attr.to_le_bytes());
        array_push!(array, cursor, self.exter_attr.to_le_bytes());
        array_push!(array, cursor, self.lh_offset.to_le_bytes());

        array
    }

    pub fn from_reader<R: Read>(reader: &mut R) -> Result<CentralDirectoryRecord> {
        let mut buffer: [u8; CDH_LENGTH] = [0; CDH_LENGTH];
        reader.read_exact(&mut buffer)?;
        Ok(CentralDirectoryRecord::from(buffer))
    }
}

impl EndOfCentralDirectoryHeader {
    pub fn as_slice(&self) -> [u8; EOCDR_LENGTH] {
        let mut array = [0; EOCDR_LENGTH];
        let mut cursor = 0;

        array_push!(array, cursor, self.disk_num.to_le_bytes());
        array_push!(array, cursor, self.start_cent_dir_disk.to_le_bytes());
        array_push!(array, cursor, self.num_of_entries_disk.to_le_bytes());
        array_push!(array, cursor, self.num_of_entries.to_le_bytes());
        array_push!(array, cursor, self.size_cent_dir.to_le_bytes());
        array_push!(array, cursor, self.cent_dir_offset.to_le_bytes());
        array_push!(array, cursor, self.file_comm_length.to_le_bytes());

        array
    }
}

impl From<[u8; CDH_LENGTH]> for CentralDirectoryRecord {
    fn from(value: [u8; CDH_LENGTH]) -> CentralDirectoryRecord {
        CentralDirectoryRecord {
            v_made_by: le_u16(&value, 0),
            v_needed: le_u16(&value, 2),
            flags: le_u16(&value, 4),
            compression: le_u16(&value, 6),
            mod_time: le_u16(&value, 8),
            mod_date: le_u16(&value, 10),
            crc: le_u32(&value, 12),
            compressed_size: le_u32(&value, 16),
            uncompressed_size: le_u32(&value, 20),
            file_name_length: le_u16(&value, 24),
            extra_field_length: le_u16(&value, 26),
            file_comment_length: le_u16(&value, 28),
            disk_start: le_u16(&value, 30),
            inter_attr: le_u16(&value, 32),
            exter_attr: le_u32(&value, 34),
            lh_offset: le_u32(&value, 38),
        }
    }
}

impl From<[u8; EOCDR_LENGTH]> for EndOfCentralDirectoryHeader {
    fn from(value: [u8; EOCDR_LENGTH]) -> EndOfCentralDirectoryHeader {
        EndOfCentralDirectoryHeader {
            disk_num: le_u16(&value, 0),
            start_cent_dir_disk: le_u16(&value, 2),
            num_of_entries_disk: le_u16(&value, 4),
            num_of_entries: le_u16(&value, 6),
            size_cent_dir: le_u32(&value, 8),
            cent_dir_offset: le_u32(&value, 12),
            file_comm_length: le_u16(&value, 16),
        }
    }
}

fn le_u16(value: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([value[at], value[at + 1]])
}

fn le_u32(value: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([value[at], value[at + 1], value[at + 2], value[at + 3]])
}
