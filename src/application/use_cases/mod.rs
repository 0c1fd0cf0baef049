/// Use cases module containing application business logic orchestration
mod map_license;

pub use map_license::MapLicenseUseCase;
