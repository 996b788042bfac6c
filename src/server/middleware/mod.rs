//! Request guards used by the controllers.

pub mod auth;

#[cfg(test)]
mod test;
