use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tempfile::{tempdir, TempDir};

use cpfs::BLOCK_SIZE;

pub fn get_temp_dir() -> TempDir {
    return tempdir().unwrap();
}

/// Create an image file holding `blocks` zeroed blocks.
pub fn create_image(dir: &TempDir, name: &str, blocks: u64) -> String {
    let path = dir.path().join(name);
    let file = File::create(&path).unwrap();
    file.set_len(blocks * BLOCK_SIZE as u64).unwrap();

    return path.to_string_lossy().into_owned();
}

pub fn read_block(path: &str, block_index: u64) -> Vec<u8> {
    let mut file = File::open(Path::new(path)).unwrap();
    file.seek(SeekFrom::Start(block_index * BLOCK_SIZE as u64))
        .unwrap();

    let mut block = vec![0u8; BLOCK_SIZE];
    file.read_exact(&mut block).unwrap();

    return block;
}

pub fn read_image(path: &str) -> Vec<u8> {
    return std::fs::read(path).unwrap();
}
