pub mod alertas;
pub mod analisis;
pub mod dashboard;
pub mod login;
pub mod not_found;
