mod errors;

pub use errors::Error;

pub type FilmQueryResult<T> = Result<T, Error>;
