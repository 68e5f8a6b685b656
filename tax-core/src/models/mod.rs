mod bracket;
mod federal;
mod province;
mod provincial;
mod rrsp_account;
mod tax_data;

pub use bracket::TaxBracket;
pub use federal::{CppParams, EiParams, FederalTaxData};
pub use province::{ParseProvinceError, Province};
pub use provincial::{ProvincialTaxData, Surtax};
pub use rrsp_account::RrspAccount;
pub use tax_data::{MileageRates, MissingProvinceError, RrspLimits, TaxData};
