pub mod json_file;
#[cfg(test)]
pub mod memory;
