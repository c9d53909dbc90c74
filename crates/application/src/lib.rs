//! Rebind DNS Application Layer
pub mod services;
pub mod use_cases;

pub use services::PinStore;
pub use use_cases::ResolveAddressUseCase;
