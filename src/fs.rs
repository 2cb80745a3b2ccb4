use std::error::Error;
use std::fs;
use std::path::Path;

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, text)?;
    Ok(())
}
