use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::CompareError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, CompareError> {
    let file = File::open(path).map_err(|e| CompareError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
