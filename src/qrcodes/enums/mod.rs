pub mod logo_outcome;
