pub mod catchers;
pub mod credential;
pub mod json;
pub mod log;
pub mod token;
pub mod trust;

#[cfg(test)]
pub mod test;
