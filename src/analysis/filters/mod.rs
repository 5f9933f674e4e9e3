pub mod ascii_alnum;
pub mod lowercase;
pub mod stemmer;
