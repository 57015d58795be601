use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Tenant {
    pub id: TenantId,

    pub code: String,
    pub name: String,
    pub kind: TenantKind,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, new,
)]
#[repr(transparent)]
pub struct TenantId(pub u64);

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum TenantKind {
    #[strum(serialize = "company")]
    Company,
    #[strum(serialize = "retailer")]
    Retailer,
}
